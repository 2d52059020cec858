//! Chat command parsing.

const SIGNAL_COMMAND: &str = "/signal";

/// A parsed inbound chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/signal PAIR TIMEFRAME`
    Signal { pair: String, timeframe: String },
    /// `/signal` with fewer than two arguments
    Usage,
    /// Anything else
    Unknown,
}

impl Command {
    /// Parse message text. Extra arguments after the timeframe are ignored.
    pub fn parse(text: &str) -> Self {
        let mut tokens = text.split_whitespace();

        let Some(head) = tokens.next() else {
            return Command::Unknown;
        };

        // Group chats address commands as `/signal@BotName`.
        let command = head.split('@').next().unwrap_or(head);
        if !command.eq_ignore_ascii_case(SIGNAL_COMMAND) {
            return Command::Unknown;
        }

        match (tokens.next(), tokens.next()) {
            (Some(pair), Some(timeframe)) => Command::Signal {
                pair: pair.to_uppercase(),
                timeframe: timeframe.to_string(),
            },
            _ => Command::Usage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(pair: &str, timeframe: &str) -> Command {
        Command::Signal {
            pair: pair.to_string(),
            timeframe: timeframe.to_string(),
        }
    }

    #[test]
    fn test_parse_signal_command() {
        assert_eq!(Command::parse("/signal BTCUSDT 1h"), signal("BTCUSDT", "1h"));
        assert_eq!(Command::parse("/signal btcusdt 1h"), signal("BTCUSDT", "1h"));
        assert_eq!(Command::parse("  /signal   ethusdt\t4h  "), signal("ETHUSDT", "4h"));
    }

    #[test]
    fn test_parse_ignores_extra_tokens() {
        assert_eq!(Command::parse("/signal BTCUSDT 1h now please"), signal("BTCUSDT", "1h"));
    }

    #[test]
    fn test_parse_bot_mention() {
        assert_eq!(Command::parse("/signal@RelayBot SOLUSDT 15m"), signal("SOLUSDT", "15m"));
    }

    #[test]
    fn test_parse_usage() {
        assert_eq!(Command::parse("/signal"), Command::Usage);
        assert_eq!(Command::parse("/signal BTCUSDT"), Command::Usage);
        assert_eq!(Command::parse("/signal@RelayBot"), Command::Usage);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Command::parse(""), Command::Unknown);
        assert_eq!(Command::parse("hello"), Command::Unknown);
        assert_eq!(Command::parse("/start"), Command::Unknown);
        assert_eq!(Command::parse("/signals BTCUSDT 1h"), Command::Unknown);
        assert_eq!(Command::parse("signal BTCUSDT 1h"), Command::Unknown);
    }
}
