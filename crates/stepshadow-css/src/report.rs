//! Plain-text report of every interaction state.

use strum::IntoEnumIterator;

use crate::state::InteractionState;

/// Label line followed by the state's shadow list, newline-terminated.
#[must_use]
pub fn state_block(state: InteractionState) -> String {
    format!("{}\n{}\n", state.label(), state.shadows())
}

/// All states in order, separated by a blank line.
#[must_use]
pub fn render_report() -> String {
    let mut out = String::new();
    for (i, state) in InteractionState::iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&state_block(state));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_block() {
        assert_eq!(
            state_block(InteractionState::Active),
            "Active (3px):\n1px 1px 0 var(--dark), 2px 2px 0 var(--dark), 3px 3px 0 var(--dark)\n"
        );
    }

    #[test]
    fn test_blocks_separated_by_single_blank_line() {
        let report = render_report();
        assert_eq!(report.matches("\n\n").count(), 2);
        assert!(!report.contains("\n\n\n"));
        assert!(report.ends_with("var(--dark)\n"));
    }
}
