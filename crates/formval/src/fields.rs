//! Field-name arguments for `rule`/`field`/`filter` calls.

/// Conversion for the field-name argument of pool and validator methods.
///
/// Lets one method accept a single name or several, which is how the
/// multi-field form (`field(["a", "b"])`) declares one chain shared by
/// many fields.
pub trait FieldNames {
    /// The names, in declaration order.
    fn field_names(self) -> Vec<String>;
}

impl FieldNames for &str {
    fn field_names(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl FieldNames for String {
    fn field_names(self) -> Vec<String> {
        vec![self]
    }
}

impl FieldNames for &String {
    fn field_names(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl<const N: usize> FieldNames for [&str; N] {
    fn field_names(self) -> Vec<String> {
        self.iter().map(|name| name.to_string()).collect()
    }
}

impl FieldNames for &[&str] {
    fn field_names(self) -> Vec<String> {
        self.iter().map(|name| name.to_string()).collect()
    }
}

impl FieldNames for Vec<&str> {
    fn field_names(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

impl FieldNames for Vec<String> {
    fn field_names(self) -> Vec<String> {
        self
    }
}
