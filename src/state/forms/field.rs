//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    /// Boolean flag toggled as a whole (no character input)
    Toggle(bool),
    /// Integer entry kept as a digit buffer until it is parsed on save
    Integer(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// A single input field with its label and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline,
        }
    }

    /// Create a new text field with initial value
    pub fn text_with_value(name: &str, label: &str, value: String, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(value),
            is_multiline,
        }
    }

    /// Create a new toggle field with initial value
    pub fn toggle_with_value(name: &str, label: &str, value: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Toggle(value),
            is_multiline: false,
        }
    }

    /// Create a new integer field with an initial digit buffer
    pub fn integer_with_value(name: &str, label: &str, value: String) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Integer(value),
            is_multiline: false,
        }
    }

    /// Get the text value (empty for toggle fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Integer(s) => s,
            FieldValue::Toggle(_) => "",
        }
    }

    /// Get the toggle value (false for other field types)
    pub fn as_toggle(&self) -> bool {
        match &self.value {
            FieldValue::Toggle(b) => *b,
            _ => false,
        }
    }

    /// Parse the integer buffer; None when empty or not a number
    pub fn as_integer(&self) -> Option<i64> {
        match &self.value {
            FieldValue::Integer(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    /// Flip a toggle field (no-op for other field types)
    pub fn toggle(&mut self) {
        if let FieldValue::Toggle(b) = &mut self.value {
            *b = !*b;
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Integer(s) => {
                // Digits, plus a leading minus sign.
                if c.is_ascii_digit() || (c == '-' && s.is_empty()) {
                    s.push(c);
                }
            }
            FieldValue::Toggle(_) => {}
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Integer(s) => {
                s.pop();
            }
            FieldValue::Toggle(_) => {}
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Integer(s) => s.clear(),
            FieldValue::Toggle(b) => *b = false,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Integer(s) => s.clone(),
            FieldValue::Toggle(b) => {
                if *b {
                    "Yes".to_string()
                } else {
                    "No".to_string()
                }
            }
        }
    }
}
