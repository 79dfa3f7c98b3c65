/// A registered patient as exposed outside the store. Carries no credential
/// material; the password hash only lives on the repository row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email: String,
    pub name: String,
    pub phone: String,
}
