use crate::core::sanitize::{parse_sanitized, sanitize};
use crate::core::score::{self, Evaluation};
use crate::core::{ConsumptionReading, Metric};

/// The reading being edited, kept as sanitized text per field so partial
/// input like `"12."` survives between edits.
#[derive(Debug, Clone, Default)]
pub struct Session {
    water: String,
    energy: String,
    gas: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the sanitized form of `raw` and returns it.
    pub fn set(&mut self, metric: Metric, raw: &str) -> &str {
        let field = self.field_mut(metric);
        *field = sanitize(raw);
        field
    }

    pub fn clear(&mut self, metric: Metric) {
        self.field_mut(metric).clear();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn raw(&self, metric: Metric) -> &str {
        match metric {
            Metric::Water => &self.water,
            Metric::Energy => &self.energy,
            Metric::Gas => &self.gas,
        }
    }

    pub fn has_data(&self) -> bool {
        Metric::ALL.iter().any(|metric| !self.raw(*metric).is_empty())
    }

    pub fn reading(&self) -> ConsumptionReading {
        ConsumptionReading {
            water: parse_sanitized(&self.water),
            energy: parse_sanitized(&self.energy),
            gas: parse_sanitized(&self.gas),
        }
    }

    pub fn evaluate(&self) -> Evaluation {
        score::score(self.reading())
    }

    fn field_mut(&mut self, metric: Metric) -> &mut String {
        match metric {
            Metric::Water => &mut self.water,
            Metric::Energy => &mut self.energy,
            Metric::Gas => &mut self.gas,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set(Metric, String),
    Clear(Metric),
    Reset,
    Show,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
}

/// Parses one line of `watch` input.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(CommandError::Empty);
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_ascii_lowercase().as_str() {
        "reset" => return Ok(Command::Reset),
        "show" => return Ok(Command::Show),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        _ => {}
    }

    let Some(metric) = Metric::from_name(head) else {
        return Err(CommandError::Unknown(head.to_string()));
    };

    if rest.is_empty() {
        Ok(Command::Clear(metric))
    } else {
        Ok(Command::Set(metric, rest.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_has_no_data() {
        let session = Session::new();
        assert!(!session.has_data());
        assert_eq!(session.evaluate(), Evaluation::NoData);
    }

    #[test]
    fn set_sanitizes_and_rescores() {
        let mut session = Session::new();
        assert_eq!(session.set(Metric::Water, "150,5 liters"), "150.5");
        assert!(session.has_data());
        assert_eq!(session.evaluate().total_score(), Some(92));

        session.set(Metric::Energy, "18");
        session.set(Metric::Gas, "3,5");
        assert_eq!(session.reading().gas, 3.5);
        assert_eq!(session.evaluate().total_score(), Some(58));
    }

    #[test]
    fn digitless_field_counts_as_zero_but_still_has_data() {
        let mut session = Session::new();
        session.set(Metric::Gas, ".,");
        assert!(session.has_data());
        assert_eq!(session.reading(), ConsumptionReading::default());
        assert_eq!(session.evaluate(), Evaluation::NoData);
    }

    #[test]
    fn malformed_field_keeps_its_leading_number() {
        let mut session = Session::new();
        assert_eq!(session.set(Metric::Gas, "1,2,3"), "1.2,3");
        assert_eq!(session.raw(Metric::Gas), "1.2,3");
        assert_eq!(session.reading().gas, 1.2);

        session.set(Metric::Water, "1,200.5");
        assert_eq!(session.reading().water, 1.2);
    }

    #[test]
    fn clear_and_reset() {
        let mut session = Session::new();
        session.set(Metric::Water, "120");
        session.set(Metric::Energy, "9");
        session.clear(Metric::Water);
        assert_eq!(session.raw(Metric::Water), "");
        assert_eq!(session.raw(Metric::Energy), "9");

        session.reset();
        assert!(!session.has_data());
    }

    #[test]
    fn parses_watch_commands() {
        assert_eq!(
            parse_command("water 150,5"),
            Ok(Command::Set(Metric::Water, "150,5".to_string()))
        );
        assert_eq!(
            parse_command("  E   12 kWh "),
            Ok(Command::Set(Metric::Energy, "12 kWh".to_string()))
        );
        assert_eq!(parse_command("gas"), Ok(Command::Clear(Metric::Gas)));
        assert_eq!(parse_command("RESET"), Ok(Command::Reset));
        assert_eq!(parse_command("show"), Ok(Command::Show));
        assert_eq!(parse_command("exit"), Ok(Command::Quit));
        assert_eq!(parse_command("   "), Err(CommandError::Empty));
        assert_eq!(
            parse_command("oil 3"),
            Err(CommandError::Unknown("oil".to_string()))
        );
    }
}
