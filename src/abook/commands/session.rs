use super::{CmdMessage, CmdResult};

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";

pub fn hello() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info(GREETING))
}

/// Ends the session. Stopping the read loop is up to the caller.
pub fn exit() -> CmdResult {
    CmdResult::default()
        .with_message(CmdMessage::info(FAREWELL))
        .exiting()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_sets_flag() {
        let result = exit();
        assert!(result.should_exit);
        assert_eq!(result.messages[0].content, "Good bye!");
        assert!(!hello().should_exit);
    }
}
