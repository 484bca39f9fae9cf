use crate::domain::value_objects::ids::ClientId;
use time::Date;

/// Minimum age, in whole years, required to hold an account.
pub const MINIMUM_AGE: i32 = 18;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub birth_date: Date,
    pub cpf: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Mutable profile fields. Identity fields (`id`, `cpf`, `birth_date`) are
/// never part of an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Client {
    pub fn new(
        id: ClientId,
        name: String,
        birth_date: Date,
        cpf: String,
        email: Option<String>,
        phone: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            birth_date,
            cpf,
            email,
            phone,
        }
    }

    /// Age in whole years on the given date.
    pub fn age_on(&self, today: Date) -> i32 {
        let mut age = today.year() - self.birth_date.year();
        let had_birthday = (today.month() as u8, today.day())
            >= (self.birth_date.month() as u8, self.birth_date.day());
        if !had_birthday {
            age -= 1;
        }
        age
    }

    pub fn is_eligible_on(&self, today: Date) -> bool {
        self.age_on(today) >= MINIMUM_AGE
    }

    /// Returns a copy with the mutable fields replaced by the patch.
    /// `id`, `cpf`, and `birth_date` are preserved unconditionally.
    pub fn with_profile(&self, patch: &ProfileUpdate) -> Self {
        Self {
            id: self.id,
            name: patch.name.clone(),
            birth_date: self.birth_date,
            cpf: self.cpf.clone(),
            email: patch.email.clone(),
            phone: patch.phone.clone(),
        }
    }
}
