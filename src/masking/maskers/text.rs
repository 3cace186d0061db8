//! Text-shaped maskers: free text, digit strings, card numbers, addresses

use super::Masker;

impl Masker {
    /// Keep the first and last character, hide the rest
    ///
    /// Strings of two characters or fewer are hidden entirely. Lengths are
    /// counted in chars, not bytes.
    ///
    /// ```
    /// use tabmask::masking::maskers::Masker;
    ///
    /// let masker = Masker::default();
    /// assert_eq!(masker.partial("Jasmine"), "J*****e");
    /// assert_eq!(masker.partial("Al"), "**");
    /// ```
    pub fn partial(&self, value: &str) -> String {
        let chars: Vec<char> = value.chars().collect();
        let len = chars.len();

        if len <= 2 {
            return self.fill(len);
        }

        let mut masked = String::with_capacity(value.len());
        masked.push(chars[0]);
        masked.push_str(&self.fill(len - 2));
        masked.push(chars[len - 1]);
        masked
    }

    /// Partially mask each space-separated word
    pub fn partial_words(&self, value: &str) -> String {
        value
            .split(' ')
            .map(|word| {
                if word.is_empty() {
                    String::new()
                } else {
                    self.partial(word)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Drop everything but ASCII digits, then partially mask the digits
    pub fn numeric_string(&self, value: &str) -> String {
        let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
        self.partial(&digits)
    }

    /// Hide all but the last four characters
    pub fn credit_card(&self, value: &str) -> String {
        let len = value.chars().count();
        if len <= 4 {
            return value.to_string();
        }

        let visible: String = value.chars().skip(len - 4).collect();
        format!("{}{}", self.fill(len - 4), visible)
    }

    /// Mask an address line by line
    ///
    /// Lines holding digits have every digit hidden; other lines have every
    /// word partially masked. The original line separator is kept.
    pub fn address(&self, value: &str) -> String {
        let separator = if value.contains("\r\n") { "\r\n" } else { "\n" };

        value
            .split(separator)
            .map(|line| {
                if line.chars().any(|c| c.is_ascii_digit()) {
                    line.chars()
                        .map(|c| if c.is_ascii_digit() { self.mask_char } else { c })
                        .collect()
                } else {
                    self.partial_words(line)
                }
            })
            .collect::<Vec<_>>()
            .join(separator)
    }
}
