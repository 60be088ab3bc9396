use super::Arg;
use crate::error::{AbookError, Result};

/// The argument at `index`, or an argument error naming `what` when it is
/// absent or a padding slot.
pub fn required<'a>(args: &'a [Arg], index: usize, what: &str) -> Result<&'a str> {
    optional(args, index).ok_or_else(|| AbookError::Argument(format!("Missing argument: {}", what)))
}

pub fn optional(args: &[Arg], index: usize) -> Option<&str> {
    args.get(index).and_then(|arg| arg.as_deref())
}

/// All real (non-padding) arguments, in order.
pub fn tokens(args: &[Arg]) -> Vec<&str> {
    args.iter().filter_map(|arg| arg.as_deref()).collect()
}

#[cfg(test)]
pub(crate) fn args(raw: &[&str]) -> Vec<Arg> {
    raw.iter().map(|s| Some(s.to_string())).collect()
}
