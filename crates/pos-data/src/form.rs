//! Multipart form data.
//!
//! Mirrors the browser `FormData` API closely enough that product payloads
//! read the same way on both sides: `append` adds a field, `set` replaces
//! every field with the same name.

/// Value of a single form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    /// Plain text field.
    Text(String),
    /// Binary file field.
    File {
        bytes: Vec<u8>,
        file_name: String,
        content_type: String,
    },
}

impl FormValue {
    /// Text content, if this is a text field.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(text) => Some(text),
            FormValue::File { .. } => None,
        }
    }

    /// File bytes, if this is a file field.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            FormValue::File { bytes, .. } => Some(bytes),
            FormValue::Text(_) => None,
        }
    }
}

/// A named form field.
#[derive(Debug, Clone, PartialEq)]
pub struct FormPart {
    pub name: String,
    pub value: FormValue,
}

/// An ordered list of multipart fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    parts: Vec<FormPart>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.parts.push(FormPart {
            name: name.into(),
            value: FormValue::Text(value.into()),
        });
        self
    }

    /// Append a file field.
    pub fn append_file(
        &mut self,
        name: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
    ) -> &mut Self {
        self.parts.push(FormPart {
            name: name.into(),
            value: FormValue::File {
                bytes: bytes.into(),
                file_name: file_name.into(),
                content_type: content_type.into(),
            },
        });
        self
    }

    /// Replace all fields named `name` with a single text field.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        self.remove(&name);
        self.append(name, value)
    }

    /// Replace all fields named `name` with a single file field.
    pub fn set_file(
        &mut self,
        name: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
    ) -> &mut Self {
        let name = name.into();
        self.remove(&name);
        self.append_file(name, bytes, file_name, content_type)
    }

    /// Remove every field named `name`.
    pub fn remove(&mut self, name: &str) {
        self.parts.retain(|p| p.name != name);
    }

    /// First value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.parts.iter().find(|p| p.name == name).map(|p| &p.value)
    }

    /// First text value stored under `name`.
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FormValue::as_text)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Field names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<FormPart> {
        self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order() {
        let mut form = FormData::new();
        form.append("id", "1").append("name", "Mug").append("price", "4.5");
        assert_eq!(form.names(), vec!["id", "name", "price"]);
        assert_eq!(form.get_text("name"), Some("Mug"));
    }

    #[test]
    fn test_set_file_replaces_text_field() {
        let mut form = FormData::new();
        form.append("id", "1").append("image", "aGVsbG8=");
        form.set_file("image", b"hello".to_vec(), "image.jpg", "image/jpeg");

        assert_eq!(form.len(), 2);
        let image = form.get("image").unwrap();
        assert_eq!(image.as_bytes(), Some(&b"hello"[..]));
        assert_eq!(image.as_text(), None);
    }

    #[test]
    fn test_set_replaces_duplicates() {
        let mut form = FormData::new();
        form.append("tag", "a").append("tag", "b");
        form.set("tag", "c");
        assert_eq!(form.len(), 1);
        assert_eq!(form.get_text("tag"), Some("c"));
    }

    #[test]
    fn test_missing_field() {
        let form = FormData::new();
        assert!(form.is_empty());
        assert!(!form.contains("id"));
        assert_eq!(form.get_text("id"), None);
    }
}
