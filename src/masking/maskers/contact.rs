//! Email and phone maskers

use super::Masker;

/// Digits of the subscriber segment left visible by [`Masker::phone`]
const PHONE_VISIBLE_DIGITS: usize = 2;

impl Masker {
    /// Partially mask the local part of an email, keep the domain verbatim
    ///
    /// Values without an `@` are returned unchanged. The split happens at the
    /// last `@`, so quoted local parts containing `@` keep their domain.
    pub fn email(&self, value: &str) -> String {
        match value.rsplit_once('@') {
            Some((local, domain)) => format!("{}@{}", self.partial(local), domain),
            None => value.to_string(),
        }
    }

    /// Mask a `(AAA)-NNNNNNN` phone number down to its last two digits
    ///
    /// The area code stays visible. Any other shape is returned unchanged.
    pub fn phone(&self, value: &str) -> String {
        match split_phone(value) {
            Some((area, subscriber)) => {
                let hidden = subscriber.len() - PHONE_VISIBLE_DIGITS;
                format!(
                    "({area})-{}{}",
                    self.fill(hidden),
                    &subscriber[hidden..]
                )
            }
            None => value.to_string(),
        }
    }
}

/// Split `(AAA)-NNNNNNN` into area code and subscriber digits
fn split_phone(value: &str) -> Option<(&str, &str)> {
    let rest = value.strip_prefix('(')?;
    let (area, subscriber) = rest.split_once(")-")?;

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if area.len() == 3 && subscriber.len() == 7 && all_digits(area) && all_digits(subscriber) {
        Some((area, subscriber))
    } else {
        None
    }
}
