/// Partial profile update.
///
/// A field that is `None` *or* an empty string leaves the stored value
/// unchanged. There is no way to clear a field to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserUpdate {
    /// New name, if one was actually provided
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    /// New email, if one was actually provided
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|s| !s.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.name().is_none() && self.email().is_none()
    }
}
