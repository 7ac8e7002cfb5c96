//! Frontend Models
//!
//! User records as returned by the remote service, plus the flat draft the
//! form edits and the nested payload the service expects on writes.

use serde::{Deserialize, Serialize};

/// Company a user belongs to (nested in the remote read/write shape)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

/// User record (matches the remote `/users` shape; extra fields are ignored)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

impl UserRecord {
    /// Link target for the website column (stored without scheme)
    pub fn website_href(&self) -> String {
        format!("http://{}", self.website)
    }
}

/// Editable projection of a [`UserRecord`] with the company name flattened
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub company_name: String,
}

/// One input of the user form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Email,
    Phone,
    Website,
    CompanyName,
}

impl DraftField {
    /// All fields in form order
    pub const ALL: [DraftField; 5] = [
        DraftField::Name,
        DraftField::Email,
        DraftField::Phone,
        DraftField::Website,
        DraftField::CompanyName,
    ];

    /// HTML `name`/`id` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Email => "email",
            DraftField::Phone => "phone",
            DraftField::Website => "website",
            DraftField::CompanyName => "companyName",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Name => "Name:",
            DraftField::Email => "Email:",
            DraftField::Phone => "Phone:",
            DraftField::Website => "Website:",
            DraftField::CompanyName => "Company Name:",
        }
    }

    /// HTML input type
    pub fn input_type(&self) -> &'static str {
        match self {
            DraftField::Email => "email",
            DraftField::Phone => "tel",
            DraftField::Website => "url",
            DraftField::Name | DraftField::CompanyName => "text",
        }
    }
}

impl UserDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Email => &self.email,
            DraftField::Phone => &self.phone,
            DraftField::Website => &self.website,
            DraftField::CompanyName => &self.company_name,
        }
    }

    /// Replace exactly one field
    pub fn set(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Email => &mut self.email,
            DraftField::Phone => &mut self.phone,
            DraftField::Website => &mut self.website,
            DraftField::CompanyName => &mut self.company_name,
        };
        *slot = value;
    }

    /// Build a record carrying this draft's fields under the given id
    pub fn into_record(self, id: u32) -> UserRecord {
        UserRecord {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            website: self.website,
            company: Company { name: self.company_name },
        }
    }
}

impl From<&UserRecord> for UserDraft {
    fn from(user: &UserRecord) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            website: user.website.clone(),
            company_name: user.company.name.clone(),
        }
    }
}

/// Partial draft accepted by update; unset fields are sent as empty strings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub company_name: Option<String>,
}

impl UserPatch {
    /// Fill missing fields with empty strings
    pub fn to_draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            website: self.website.clone().unwrap_or_default(),
            company_name: self.company_name.clone().unwrap_or_default(),
        }
    }
}

impl From<UserDraft> for UserPatch {
    fn from(draft: UserDraft) -> Self {
        Self {
            name: Some(draft.name),
            email: Some(draft.email),
            phone: Some(draft.phone),
            website: Some(draft.website),
            company_name: Some(draft.company_name),
        }
    }
}

/// Remote write shape for POST/PUT `/users`
#[derive(Debug, Serialize)]
pub struct UserPayload<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub website: &'a str,
    pub company: CompanyPayload<'a>,
}

#[derive(Debug, Serialize)]
pub struct CompanyPayload<'a> {
    pub name: &'a str,
}

impl<'a> From<&'a UserDraft> for UserPayload<'a> {
    fn from(draft: &'a UserDraft) -> Self {
        Self {
            name: &draft.name,
            email: &draft.email,
            phone: &draft.phone,
            website: &draft.website,
            company: CompanyPayload { name: &draft.company_name },
        }
    }
}
