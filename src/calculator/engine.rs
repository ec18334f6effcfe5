//! The calculator state machine.
//!
//! Holds the operand being typed, the operand waiting on a pending
//! operation, and whether the next digit starts a fresh operand. Every
//! operation is total: input that makes no sense in the current state is
//! dropped without touching the state.

use super::display::{DisplayOptions, DisplaySnapshot, render};
use super::number::{parse_operand, render_number, round_to_digits};
use super::operation::Operation;

/// Fractional digits kept after `compute`.
pub const DEFAULT_ROUNDING_DIGITS: u32 = 8;

/// Upper bound for configured rounding; `10^15` still scales exactly.
pub const MAX_ROUNDING_DIGITS: u32 = 15;

/// A single user action, as produced by the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// A digit `0`-`9` or the decimal point.
    AppendDigit(char),
    DeleteLastDigit,
    Clear,
    ChooseOperation(Operation),
    Compute,
    /// Divide the current operand by 100 in place.
    PercentImmediate,
}

/// Snapshot of the calculator's state.
///
/// `previous_operand` is empty whenever `operation` is `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineState {
    current: String,
    previous: String,
    operation: Option<Operation>,
    reset_on_next_digit: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            current: "0".to_string(),
            previous: String::new(),
            operation: None,
            reset_on_next_digit: false,
        }
    }
}

impl EngineState {
    pub fn current_operand(&self) -> &str {
        &self.current
    }

    pub fn previous_operand(&self) -> &str {
        &self.previous
    }

    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// Whether the next digit replaces the current operand.
    pub fn resets_on_next_digit(&self) -> bool {
        self.reset_on_next_digit
    }
}

/// Tunables for arithmetic results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineOptions {
    pub rounding_digits: u32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            rounding_digits: DEFAULT_ROUNDING_DIGITS,
        }
    }
}

/// Four-function calculator with a single pending operation.
#[derive(Clone, Debug, Default)]
pub struct CalculatorEngine {
    state: EngineState,
    options: EngineOptions,
    display_options: DisplayOptions,
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EngineOptions, display_options: DisplayOptions) -> Self {
        Self {
            state: EngineState::default(),
            options,
            display_options,
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Run a command and return the readout to show afterwards.
    pub fn apply(&mut self, command: Command) -> DisplaySnapshot {
        match command {
            Command::AppendDigit(symbol) => self.append_digit(symbol),
            Command::DeleteLastDigit => self.delete_last_digit(),
            Command::Clear => self.clear(),
            Command::ChooseOperation(op) => self.choose_operation(op),
            Command::Compute => self.compute(),
            Command::PercentImmediate => self.apply_percent_immediate(),
        }
        self.snapshot()
    }

    /// Run commands in order, returning the final readout.
    pub fn apply_all<I>(&mut self, commands: I) -> DisplaySnapshot
    where
        I: IntoIterator<Item = Command>,
    {
        for command in commands {
            self.apply(command);
        }
        self.snapshot()
    }

    /// Current readout without changing state.
    pub fn snapshot(&self) -> DisplaySnapshot {
        render(&self.state, &self.display_options)
    }

    pub fn clear(&mut self) {
        self.state = EngineState::default();
        tracing::debug!("calculator cleared");
    }

    /// Append a digit or decimal point to the current operand.
    pub fn append_digit(&mut self, symbol: char) {
        if !symbol.is_ascii_digit() && symbol != '.' {
            tracing::trace!("ignoring non-digit symbol {:?}", symbol);
            return;
        }

        let state = &mut self.state;
        if state.reset_on_next_digit {
            state.current.clear();
            state.reset_on_next_digit = false;
        }

        if symbol == '.' && state.current.contains('.') {
            tracing::trace!("operand {:?} already has a decimal point", state.current);
            return;
        }

        if state.current == "0" && symbol != '.' {
            state.current = symbol.to_string();
        } else {
            state.current.push(symbol);
        }
        tracing::debug!("operand is now {:?}", state.current);
    }

    /// Drop the last character of the current operand, falling back to `"0"`.
    pub fn delete_last_digit(&mut self) {
        let current = &mut self.state.current;
        if *current == "0" {
            return;
        }

        if current.chars().count() == 1 {
            *current = "0".to_string();
        } else {
            current.pop();
        }
        tracing::debug!("operand is now {:?}", current);
    }

    /// Record `op` as pending, evaluating any operation already pending first.
    pub fn choose_operation(&mut self, op: Operation) {
        if self.state.current.is_empty() {
            tracing::trace!("no operand to apply {} to", op);
            return;
        }

        if !self.state.previous.is_empty() {
            self.compute();
        }

        let state = &mut self.state;
        state.operation = Some(op);
        state.previous = state.current.clone();
        state.reset_on_next_digit = true;
        tracing::debug!("pending {} {}", state.previous, op);
    }

    /// Evaluate the pending operation into the current operand.
    pub fn compute(&mut self) {
        let state = &mut self.state;
        let Some(op) = state.operation else {
            tracing::trace!("compute with no pending operation");
            return;
        };

        let (Some(prev), Some(current)) = (
            parse_operand(&state.previous),
            parse_operand(&state.current),
        ) else {
            tracing::trace!(
                "cannot compute {:?} {} {:?}",
                state.previous,
                op,
                state.current
            );
            return;
        };

        let Some(result) = op.apply(prev, current) else {
            tracing::trace!("{} has no binary evaluation", op);
            return;
        };

        let result = round_to_digits(result, self.options.rounding_digits);
        tracing::debug!("{} {} {} = {}", prev, op, current, result);

        state.current = render_number(result);
        state.previous.clear();
        state.operation = None;
        state.reset_on_next_digit = true;
    }

    /// Divide the current operand by 100 without touching any pending operation.
    pub fn apply_percent_immediate(&mut self) {
        let Some(value) = parse_operand(&self.state.current) else {
            tracing::trace!("percent of non-number {:?}", self.state.current);
            return;
        };

        self.state.current = render_number(value / 100.0);
        tracing::debug!("operand is now {:?}", self.state.current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(keys: &[Command]) -> CalculatorEngine {
        let mut engine = CalculatorEngine::new();
        engine.apply_all(keys.iter().copied());
        engine
    }

    fn digits(text: &str) -> Vec<Command> {
        text.chars().map(Command::AppendDigit).collect()
    }

    #[test]
    fn test_initial_state() {
        let engine = CalculatorEngine::new();
        let state = engine.state();
        assert_eq!(state.current_operand(), "0");
        assert_eq!(state.previous_operand(), "");
        assert_eq!(state.operation(), None);
        assert!(!state.resets_on_next_digit());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut engine = engine_with(&[
            Command::AppendDigit('7'),
            Command::ChooseOperation(Operation::Divide),
            Command::AppendDigit('2'),
        ]);

        let snapshot = engine.apply(Command::Clear);
        assert_eq!(snapshot.display, "0");
        assert_eq!(snapshot.history, "");
        assert_eq!(engine.state(), &EngineState::default());
    }

    #[test]
    fn test_digits_replace_leading_zero() {
        let mut engine = CalculatorEngine::new();
        engine.append_digit('5');
        let snapshot = engine.apply(Command::AppendDigit('0'));
        assert_eq!(engine.state().current_operand(), "50");
        assert_eq!(snapshot.display, "50");

        let engine = engine_with(&digits("007"));
        assert_eq!(engine.state().current_operand(), "7");
    }

    #[test]
    fn test_second_decimal_point_rejected() {
        let engine = engine_with(&digits(".."));
        assert_eq!(engine.state().current_operand(), "0.");

        let engine = engine_with(&digits("1.2.3"));
        assert_eq!(engine.state().current_operand(), "1.23");
    }

    #[test]
    fn test_non_digit_symbol_ignored() {
        let engine = engine_with(&digits("4a"));
        assert_eq!(engine.state().current_operand(), "4");
    }

    #[test]
    fn test_delete_last_digit() {
        let mut engine = engine_with(&digits("12"));
        engine.delete_last_digit();
        assert_eq!(engine.state().current_operand(), "1");
        engine.delete_last_digit();
        assert_eq!(engine.state().current_operand(), "0");
        engine.delete_last_digit();
        assert_eq!(engine.state().current_operand(), "0");
    }

    #[test]
    fn test_choose_operation_moves_operand() {
        let mut engine = engine_with(&digits("12"));
        let snapshot = engine.apply(Command::ChooseOperation(Operation::Add));

        let state = engine.state();
        assert_eq!(state.previous_operand(), "12");
        assert_eq!(state.current_operand(), "12");
        assert_eq!(state.operation(), Some(Operation::Add));
        assert!(state.resets_on_next_digit());
        assert_eq!(snapshot.history, "12 +");
        assert_eq!(snapshot.display, "12");
    }

    #[test]
    fn test_next_digit_starts_fresh_operand() {
        let mut engine = engine_with(&digits("12"));
        engine.choose_operation(Operation::Subtract);
        engine.append_digit('3');
        assert_eq!(engine.state().current_operand(), "3");
        assert_eq!(engine.state().previous_operand(), "12");
    }

    #[test]
    fn test_chained_operations() {
        let mut commands = vec![Command::Clear, Command::AppendDigit('5')];
        commands.push(Command::ChooseOperation(Operation::Add));
        commands.push(Command::AppendDigit('3'));
        commands.push(Command::ChooseOperation(Operation::Multiply));
        commands.push(Command::AppendDigit('2'));
        let mut engine = engine_with(&commands);

        assert_eq!(engine.snapshot().history, "8 ×");

        let snapshot = engine.apply(Command::Compute);
        assert_eq!(engine.state().current_operand(), "16");
        assert_eq!(snapshot.display, "16");
        assert_eq!(snapshot.history, "");
    }

    #[test]
    fn test_repeated_operator_reuses_operand() {
        // "5 + ×" evaluates 5 + 5 before recording ×.
        let mut engine = engine_with(&digits("5"));
        engine.choose_operation(Operation::Add);
        engine.choose_operation(Operation::Multiply);
        assert_eq!(engine.state().previous_operand(), "10");
        assert_eq!(engine.state().operation(), Some(Operation::Multiply));
    }

    #[test]
    fn test_compute_rounds_float_noise() {
        let mut engine = engine_with(&digits("0.1"));
        engine.choose_operation(Operation::Add);
        engine.apply_all(digits("0.2"));
        let snapshot = engine.apply(Command::Compute);
        assert_eq!(snapshot.display, "0.3");
    }

    #[test]
    fn test_compute_respects_rounding_option() {
        let mut engine = CalculatorEngine::with_options(
            EngineOptions { rounding_digits: 2 },
            DisplayOptions::default(),
        );
        engine.append_digit('2');
        engine.choose_operation(Operation::Divide);
        engine.append_digit('3');
        engine.compute();
        assert_eq!(engine.state().current_operand(), "0.67");
    }

    #[test]
    fn test_compute_without_operation_is_noop() {
        let mut engine = engine_with(&digits("42"));
        let before = engine.state().clone();
        engine.compute();
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_compute_with_unparseable_operand_is_noop() {
        let mut engine = engine_with(&digits("8"));
        engine.choose_operation(Operation::Multiply);
        engine.append_digit('.');
        let before = engine.state().clone();
        engine.compute();
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_digit_after_compute_starts_fresh() {
        let mut engine = engine_with(&digits("2"));
        engine.choose_operation(Operation::Add);
        engine.append_digit('2');
        engine.compute();
        engine.append_digit('9');
        assert_eq!(engine.state().current_operand(), "9");
    }

    #[test]
    fn test_division_by_zero() {
        let mut engine = engine_with(&digits("5"));
        engine.choose_operation(Operation::Divide);
        engine.append_digit('0');
        let snapshot = engine.apply(Command::Compute);
        assert_eq!(engine.state().current_operand(), "Infinity");
        assert_eq!(snapshot.display, "Infinity");

        let mut engine = engine_with(&digits("0"));
        engine.choose_operation(Operation::Divide);
        engine.append_digit('0');
        let snapshot = engine.apply(Command::Compute);
        assert_eq!(snapshot.display, "NaN");
    }

    #[test]
    fn test_percent_immediate() {
        let mut engine = engine_with(&digits("50"));
        let snapshot = engine.apply(Command::PercentImmediate);
        assert_eq!(engine.state().current_operand(), "0.5");
        assert_eq!(snapshot.display, "0.5");
    }

    #[test]
    fn test_percent_leaves_pending_operation() {
        let mut engine = engine_with(&digits("200"));
        engine.choose_operation(Operation::Add);
        engine.append_digit('5');
        engine.apply_percent_immediate();

        let state = engine.state();
        assert_eq!(state.current_operand(), "0.05");
        assert_eq!(state.previous_operand(), "200");
        assert_eq!(state.operation(), Some(Operation::Add));
    }

    #[test]
    fn test_percent_of_nan_is_noop() {
        let mut engine = engine_with(&digits("0"));
        engine.choose_operation(Operation::Divide);
        engine.append_digit('0');
        engine.compute();
        let before = engine.state().clone();
        engine.apply_percent_immediate();
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_binary_percent_is_noop() {
        let mut engine = engine_with(&digits("50"));
        engine.choose_operation(Operation::Percent);
        engine.append_digit('1');
        engine.append_digit('0');
        let before = engine.state().clone();
        let snapshot = engine.apply(Command::Compute);
        assert_eq!(engine.state(), &before);
        assert_eq!(snapshot.history, "50 %");
    }

    #[test]
    fn test_history_formats_previous_operand() {
        let mut engine = engine_with(&digits("1234.5"));
        let snapshot = engine.apply(Command::ChooseOperation(Operation::Multiply));
        assert_eq!(snapshot.history, "1,234.5 ×");
    }
}
