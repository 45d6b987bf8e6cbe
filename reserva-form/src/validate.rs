use crate::fields::{PassengerField, ScalarField};

/// Declarative validation rules, one set per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    MinLength(usize),
    EmailFormat,
    IntegerRange { min: i64, max: i64 },
    MustBeTrue,
}

/// A single failed rule on a field value.
///
/// When several rules fail at once, the reported message is the violation
/// with the lowest priority rank: required, then email format, then minimum
/// length, then numeric minimum, then numeric maximum, then the generic one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Required,
    EmailFormat,
    MinLength(usize),
    NumericMin(i64),
    NumericMax(i64),
    Invalid,
}

impl Violation {
    fn rank(&self) -> u8 {
        match self {
            Violation::Required => 0,
            Violation::EmailFormat => 1,
            Violation::MinLength(_) => 2,
            Violation::NumericMin(_) => 3,
            Violation::NumericMax(_) => 4,
            Violation::Invalid => 5,
        }
    }

    /// User-facing message, with the literal wording of the form labels.
    pub fn message(&self) -> String {
        match self {
            Violation::Required => "Este campo es obligatorio".to_string(),
            Violation::EmailFormat => "Formato de email inválido".to_string(),
            Violation::MinLength(min) => format!("Mínimo {} caracteres", min),
            Violation::NumericMin(min) => format!("El valor mínimo es {}", min),
            Violation::NumericMax(max) => format!("El valor máximo es {}", max),
            Violation::Invalid => "Error de validación".to_string(),
        }
    }
}

/// Borrowed view of a field value, as seen by the validators.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
    Count(i32),
}

/// Rule sets for the scalar controls.
pub fn scalar_rules(field: ScalarField) -> &'static [Rule] {
    match field {
        ScalarField::FullName => &[Rule::Required, Rule::MinLength(3)],
        ScalarField::NationalId
        | ScalarField::Phone
        | ScalarField::BirthDate
        | ScalarField::Destination
        | ScalarField::DepartureDate
        | ScalarField::ReturnDate
        | ScalarField::TripType
        | ScalarField::TravelClass => &[Rule::Required],
        ScalarField::Email => &[Rule::Required, Rule::EmailFormat],
        ScalarField::PassengerCount => &[Rule::Required, Rule::IntegerRange { min: 1, max: 10 }],
        ScalarField::AcceptedTerms => &[Rule::Required, Rule::MustBeTrue],
        ScalarField::Newsletter => &[],
    }
}

/// Rule sets for the controls inside one passenger record.
pub fn passenger_rules(field: PassengerField) -> &'static [Rule] {
    match field {
        PassengerField::Name | PassengerField::Relation => &[Rule::Required],
        PassengerField::Age => &[Rule::Required, Rule::IntegerRange { min: 0, max: 120 }],
    }
}

/// Evaluate every rule against a value and collect the failures.
pub fn check(value: FieldValue<'_>, rules: &[Rule]) -> Vec<Violation> {
    let mut violations = Vec::new();
    for rule in rules {
        if let Some(violation) = check_rule(value, *rule) {
            violations.push(violation);
        }
    }
    violations
}

/// The highest-priority failure, which is what the form reports inline.
pub fn first_violation(value: FieldValue<'_>, rules: &[Rule]) -> Option<Violation> {
    check(value, rules).into_iter().min_by_key(|v| v.rank())
}

fn check_rule(value: FieldValue<'_>, rule: Rule) -> Option<Violation> {
    match (rule, value) {
        (Rule::Required, FieldValue::Text(text)) => {
            text.trim().is_empty().then_some(Violation::Required)
        }
        (Rule::Required, FieldValue::Flag(flag)) => (!flag).then_some(Violation::Required),
        (Rule::Required, FieldValue::Count(_)) => None,

        // Length and format rules only apply once there is a value; required
        // reports the empty case.
        (Rule::MinLength(min), FieldValue::Text(text)) => {
            (!text.is_empty() && text.chars().count() < min).then_some(Violation::MinLength(min))
        }
        (Rule::EmailFormat, FieldValue::Text(text)) => {
            (!text.is_empty() && !is_valid_email(text)).then_some(Violation::EmailFormat)
        }

        (Rule::IntegerRange { min, max }, FieldValue::Count(n)) => {
            range_violation(i64::from(n), min, max)
        }
        (Rule::IntegerRange { min, max }, FieldValue::Text(text)) => {
            if text.trim().is_empty() {
                return None;
            }
            match text.trim().parse::<i64>() {
                Ok(n) => range_violation(n, min, max),
                Err(_) => Some(Violation::Invalid),
            }
        }

        (Rule::MustBeTrue, FieldValue::Flag(flag)) => (!flag).then_some(Violation::Required),

        // A rule that does not apply to the value kind never fires.
        _ => None,
    }
}

fn range_violation(n: i64, min: i64, max: i64) -> Option<Violation> {
    if n < min {
        Some(Violation::NumericMin(min))
    } else if n > max {
        Some(Violation::NumericMax(max))
    } else {
        None
    }
}

fn is_valid_email(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = text.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(domain) => domain,
        None => return false,
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_wins_over_format() {
        let violations = check(FieldValue::Text(""), scalar_rules(ScalarField::Email));
        assert_eq!(violations, vec![Violation::Required]);

        let first = first_violation(FieldValue::Text(""), scalar_rules(ScalarField::Email));
        assert_eq!(first, Some(Violation::Required));
    }

    #[test]
    fn bad_email_reports_format_not_required() {
        let first = first_violation(
            FieldValue::Text("not-an-email"),
            scalar_rules(ScalarField::Email),
        );
        assert_eq!(first, Some(Violation::EmailFormat));
        assert_eq!(first.unwrap().message(), "Formato de email inválido");
    }

    #[test]
    fn email_format_accepts_plain_addresses() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ana@"));
        assert!(!is_valid_email("ana@example."));
        assert!(!is_valid_email("ana @example.com"));
    }

    #[test]
    fn short_full_name_reports_min_length() {
        let first = first_violation(FieldValue::Text("Al"), scalar_rules(ScalarField::FullName));
        assert_eq!(first, Some(Violation::MinLength(3)));
        assert_eq!(first.unwrap().message(), "Mínimo 3 caracteres");
    }

    #[test]
    fn age_range_is_checked_on_raw_text() {
        let rules = passenger_rules(PassengerField::Age);

        assert_eq!(first_violation(FieldValue::Text(""), rules), Some(Violation::Required));
        assert_eq!(
            first_violation(FieldValue::Text("-1"), rules),
            Some(Violation::NumericMin(0))
        );
        assert_eq!(
            first_violation(FieldValue::Text("121"), rules),
            Some(Violation::NumericMax(120))
        );
        assert_eq!(
            first_violation(FieldValue::Text("abc"), rules),
            Some(Violation::Invalid)
        );
        assert_eq!(first_violation(FieldValue::Text("35"), rules), None);
    }

    #[test]
    fn unchecked_terms_report_required() {
        let first = first_violation(
            FieldValue::Flag(false),
            scalar_rules(ScalarField::AcceptedTerms),
        );
        assert_eq!(first, Some(Violation::Required));
        assert_eq!(
            first_violation(FieldValue::Flag(true), scalar_rules(ScalarField::AcceptedTerms)),
            None
        );
    }

    #[test]
    fn newsletter_has_no_rules() {
        assert!(check(FieldValue::Flag(false), scalar_rules(ScalarField::Newsletter)).is_empty());
    }

    #[test]
    fn messages_carry_rule_parameters() {
        assert_eq!(Violation::NumericMin(1).message(), "El valor mínimo es 1");
        assert_eq!(Violation::NumericMax(10).message(), "El valor máximo es 10");
        assert_eq!(Violation::Invalid.message(), "Error de validación");
    }
}
