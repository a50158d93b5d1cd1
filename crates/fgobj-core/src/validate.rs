// ── Scalar validators ──
//
// Pure rules attached to field descriptors. A rule either passes the value
// through (possibly normalized, e.g. lowercased choices) or rejects it.
// Rules know nothing about fields; the descriptor turns a `Rejection` into
// a `ModelError` that names the field.

use std::fmt;
use std::net::Ipv4Addr;

use crate::value::FieldValue;

/// Why a rule refused a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The value is outside the rule's domain.
    Domain { rule: String, offending: String },
    /// The value is recognized but not supported yet.
    Unsupported { offending: String },
}

/// A single validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Text whose trimmed length (in characters) lies in `[min, max]`.
    /// Whitespace-only text is always rejected.
    Text { min: usize, max: usize },
    /// Text without control characters.
    Printable,
    /// Pre-shared key policy: text of 6 to 30 characters.
    Psk,
    /// Integer in `[min, max]` inclusive.
    Int { min: i64, max: i64 },
    /// Integer equal to one of the listed values.
    IntChoice(&'static [i64]),
    /// Dotted-quad IPv4 address.
    Ipv4,
    /// IPv4 address with an optional `/prefix`; a bare address means `/32`.
    Ipv4Interface,
    /// Text that, lowercased, equals one of the listed values.
    Choice(&'static [&'static str]),
    /// Text that, lowercased, names a value the device knows but this
    /// library does not handle yet.
    NotYetSupported(&'static [&'static str]),
    /// One or more text elements, each drawn from `allowed`.
    MemberOf {
        label: &'static str,
        allowed: &'static [&'static str],
    },
    /// One or more integer elements, each drawn from the listed values.
    IntMemberOf(&'static [i64]),
}

pub const PSK_MIN_LEN: usize = 6;
pub const PSK_MAX_LEN: usize = 30;

impl Rule {
    /// Check `value` and return its canonical form.
    pub fn check(&self, value: FieldValue) -> Result<FieldValue, Rejection> {
        match *self {
            Self::Text { min, max } => check_text(value, min, max).map_err(|v| self.reject(&v)),
            Self::Printable => match value {
                FieldValue::Text(ref s) if !s.chars().any(char::is_control) => Ok(value),
                other => Err(self.reject(&other)),
            },
            Self::Psk => match value {
                FieldValue::Text(ref s)
                    if (PSK_MIN_LEN..=PSK_MAX_LEN).contains(&s.chars().count()) =>
                {
                    Ok(value)
                }
                other => Err(self.reject(&other)),
            },
            Self::Int { min, max } => match value {
                FieldValue::Int(n) if (min..=max).contains(&n) => Ok(value),
                other => Err(self.reject(&other)),
            },
            Self::IntChoice(allowed) => match value {
                FieldValue::Int(n) if allowed.contains(&n) => Ok(value),
                other => Err(self.reject(&other)),
            },
            Self::Ipv4 => match value {
                FieldValue::Text(ref s) => s
                    .parse::<Ipv4Addr>()
                    .map(|addr| FieldValue::Text(addr.to_string()))
                    .map_err(|_| self.reject(&value)),
                other => Err(self.reject(&other)),
            },
            Self::Ipv4Interface => match value {
                FieldValue::Text(ref s) => parse_ipv4_interface(s)
                    .map(|(addr, prefix)| FieldValue::Text(format!("{addr}/{prefix}")))
                    .ok_or_else(|| self.reject(&value)),
                other => Err(self.reject(&other)),
            },
            Self::Choice(allowed) => match value {
                FieldValue::Text(ref s) => {
                    let lowered = s.to_lowercase();
                    if allowed.contains(&lowered.as_str()) {
                        Ok(FieldValue::Text(lowered))
                    } else {
                        Err(self.reject(&value))
                    }
                }
                other => Err(self.reject(&other)),
            },
            Self::NotYetSupported(recognized) => match value {
                FieldValue::Text(ref s) if recognized.contains(&s.to_lowercase().as_str()) => {
                    Err(Rejection::Unsupported {
                        offending: s.to_lowercase(),
                    })
                }
                other => Ok(other),
            },
            Self::MemberOf { allowed, .. } => {
                let elements = elements(value)
                    .map(split_words)
                    .map_err(|v| self.reject_empty(&v))?;
                let mut canonical = Vec::with_capacity(elements.len());
                for element in elements {
                    match element {
                        FieldValue::Text(ref s) if allowed.contains(&s.to_lowercase().as_str()) => {
                            canonical.push(FieldValue::Text(s.to_lowercase()));
                        }
                        other => return Err(self.reject(&other)),
                    }
                }
                Ok(FieldValue::List(canonical))
            }
            Self::IntMemberOf(allowed) => {
                let elements = elements(value).map_err(|v| self.reject_empty(&v))?;
                for element in &elements {
                    match element {
                        FieldValue::Int(n) if allowed.contains(n) => {}
                        other => return Err(self.reject(other)),
                    }
                }
                Ok(FieldValue::List(elements))
            }
        }
    }

    fn reject(&self, offending: &FieldValue) -> Rejection {
        Rejection::Domain {
            rule: self.to_string(),
            offending: offending.describe(),
        }
    }

    fn reject_empty(&self, offending: &FieldValue) -> Rejection {
        Rejection::Domain {
            rule: format!("{self}, with at least one element"),
            offending: offending.describe(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text { min, max } => {
                write!(f, "must be a non-blank string of {min} to {max} characters")
            }
            Self::Printable => f.write_str("must contain only printable characters"),
            Self::Psk => write!(
                f,
                "must be a string of {PSK_MIN_LEN} to {PSK_MAX_LEN} characters"
            ),
            Self::Int { min, max } => write!(f, "must be an integer between {min} and {max}"),
            Self::IntChoice(allowed) => {
                write!(f, "must be one of the integers {}", join_ints(allowed))
            }
            Self::Ipv4 => f.write_str("must be a dotted-quad IPv4 address"),
            Self::Ipv4Interface => {
                f.write_str("must be an IPv4 address with an optional /prefix of 0 to 32")
            }
            Self::Choice(allowed) => write!(f, "must be one of {}", allowed.join(", ")),
            Self::NotYetSupported(recognized) => {
                write!(f, "must not be {} (not yet supported)", recognized.join(", "))
            }
            Self::MemberOf { label, .. } => write!(f, "each element must be a valid {label}"),
            Self::IntMemberOf(allowed) => {
                write!(f, "each element must be one of {}", join_ints(allowed))
            }
        }
    }
}

fn join_ints(values: &[i64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn check_text(value: FieldValue, min: usize, max: usize) -> Result<FieldValue, FieldValue> {
    let FieldValue::Text(ref s) = value else {
        return Err(value);
    };
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(value);
    }
    if (min..=max).contains(&trimmed.chars().count()) {
        Ok(value)
    } else {
        Err(value)
    }
}

/// Split a single atomic value or a list into its elements.
/// An empty list is handed back as an error.
fn elements(value: FieldValue) -> Result<Vec<FieldValue>, FieldValue> {
    match value {
        FieldValue::List(items) if items.is_empty() => Err(FieldValue::List(items)),
        FieldValue::List(items) => Ok(items),
        atom => Ok(vec![atom]),
    }
}

/// Expand space-separated text (`"ping https"`) into one element per word.
/// Blank text is kept whole so the member check rejects it.
fn split_words(elements: Vec<FieldValue>) -> Vec<FieldValue> {
    let mut words = Vec::with_capacity(elements.len());
    for element in elements {
        match element {
            FieldValue::Text(ref s) if !s.trim().is_empty() => {
                words.extend(s.split_whitespace().map(FieldValue::from));
            }
            other => words.push(other),
        }
    }
    words
}

fn parse_ipv4_interface(raw: &str) -> Option<(Ipv4Addr, u8)> {
    match raw.split_once('/') {
        Some((addr, prefix)) => {
            let addr = addr.parse::<Ipv4Addr>().ok()?;
            let prefix = prefix.parse::<u8>().ok().filter(|p| *p <= 32)?;
            Some((addr, prefix))
        }
        None => raw.parse::<Ipv4Addr>().ok().map(|addr| (addr, 32)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn text(s: &str) -> FieldValue {
        FieldValue::from(s)
    }

    fn passes(rule: Rule, value: impl Into<FieldValue>) -> bool {
        rule.check(value.into()).is_ok()
    }

    #[test]
    fn text_measures_trimmed_length() {
        let rule = Rule::Text { min: 1, max: 4 };
        assert!(passes(rule, "  wan1  "));
        assert!(!passes(rule, "wan12"));
        assert!(!passes(rule, "   "));
        assert!(!passes(rule, ""));
        assert!(!passes(rule, 4));
    }

    #[test]
    fn text_keeps_value_as_given() {
        let rule = Rule::Text { min: 1, max: 10 };
        assert_eq!(rule.check(text(" x ")).unwrap(), text(" x "));
    }

    #[test]
    fn printable_rejects_control_characters() {
        assert!(passes(Rule::Printable, "vpn-a"));
        assert!(!passes(Rule::Printable, "vpn\u{7}a"));
    }

    #[test]
    fn psk_bounds() {
        assert!(passes(Rule::Psk, "a".repeat(6)));
        assert!(passes(Rule::Psk, "a".repeat(30)));
        assert!(!passes(Rule::Psk, "a".repeat(5)));
        assert!(!passes(Rule::Psk, "a".repeat(31)));
    }

    #[test]
    fn int_range_is_inclusive() {
        let rule = Rule::Int { min: 10, max: 900 };
        assert!(passes(rule, 10));
        assert!(passes(rule, 900));
        assert!(!passes(rule, 9));
        assert!(!passes(rule, 901));
        assert!(!passes(rule, "20"));
    }

    #[test]
    fn int_choice_rejects_text() {
        let rule = Rule::IntChoice(&[1, 2]);
        assert!(passes(rule, 1));
        assert!(passes(rule, 2));
        assert!(!passes(rule, 0));
        assert!(!passes(rule, 3));
        assert!(!passes(rule, "1"));
    }

    #[test]
    fn ipv4_boundaries() {
        assert!(passes(Rule::Ipv4, "0.0.0.0"));
        assert!(passes(Rule::Ipv4, "255.255.255.255"));
        for bad in ["256.0.0.0", "1.2.3", "::1", "", "10.0.0.0/8"] {
            assert!(!passes(Rule::Ipv4, bad), "{bad} should be rejected");
        }
        assert!(!passes(Rule::Ipv4, 167_772_161));
    }

    #[test]
    fn ipv4_interface_defaults_to_host_prefix() {
        assert_eq!(
            Rule::Ipv4Interface.check(text("192.0.2.1")).unwrap(),
            text("192.0.2.1/32")
        );
        assert_eq!(
            Rule::Ipv4Interface.check(text("192.0.2.1/24")).unwrap(),
            text("192.0.2.1/24")
        );
        assert!(!passes(Rule::Ipv4Interface, "192.0.2.1/33"));
        assert!(!passes(Rule::Ipv4Interface, "192.0.2.1/"));
    }

    #[test]
    fn choice_normalizes_to_lowercase() {
        let rule = Rule::Choice(&["dynamic", "static"]);
        assert_eq!(rule.check(text("Dynamic")).unwrap(), text("dynamic"));
        assert!(!passes(rule, "ddns"));
    }

    #[test]
    fn not_yet_supported_is_distinct() {
        let rule = Rule::NotYetSupported(&["ddns"]);
        assert_eq!(
            rule.check(text("DDNS")),
            Err(Rejection::Unsupported {
                offending: "ddns".into()
            })
        );
        assert_eq!(rule.check(text("static")).unwrap(), text("static"));
    }

    #[test]
    fn member_of_accepts_atom_or_list_and_keeps_duplicates() {
        let rule = Rule::MemberOf {
            label: "proposal",
            allowed: &["a", "b"],
        };
        assert_eq!(rule.check(text("a")).unwrap(), FieldValue::from(["a"]));
        assert_eq!(
            rule.check(FieldValue::from(["b", "a", "b"])).unwrap(),
            FieldValue::from(["b", "a", "b"])
        );
    }

    #[test]
    fn member_of_names_offending_element() {
        let rule = Rule::MemberOf {
            label: "proposal",
            allowed: &["a"],
        };
        let err = rule.check(FieldValue::from(["a", "zz"])).unwrap_err();
        assert_eq!(
            err,
            Rejection::Domain {
                rule: "each element must be a valid proposal".into(),
                offending: "\"zz\"".into(),
            }
        );
    }

    #[test]
    fn member_of_splits_space_separated_text() {
        let rule = Rule::MemberOf {
            label: "management service",
            allowed: &["ping", "https", "ssh"],
        };
        assert_eq!(
            rule.check(text("ping HTTPS  ssh ")).unwrap(),
            FieldValue::from(["ping", "https", "ssh"])
        );
        let err = rule.check(text("ping telnet")).unwrap_err();
        assert!(matches!(err, Rejection::Domain { ref offending, .. } if offending == "\"telnet\""));
        assert!(!passes(rule, "   "));
    }

    #[test]
    fn member_of_rejects_empty_list() {
        let rule = Rule::IntMemberOf(&[5]);
        assert!(rule.check(FieldValue::List(Vec::new())).is_err());
    }

    #[test]
    fn int_member_of() {
        let rule = Rule::IntMemberOf(&[5, 14]);
        assert!(passes(rule, 5));
        assert!(passes(rule, vec![5, 14]));
        let err = rule.check(FieldValue::from(vec![5, 99])).unwrap_err();
        assert!(matches!(err, Rejection::Domain { ref offending, .. } if offending == "99"));
        assert!(!passes(rule, "5"));
    }
}
