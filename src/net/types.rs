//! Wire DTOs for the REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde round-trips stay
//! lossless. Role casing is the one deliberate exception: backend snapshots
//! disagree on case, so `Role` normalizes at the deserialization boundary and
//! everything past this module compares enum values only.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Account role. Parsed case-insensitively; anything outside the closed set
/// becomes `Unknown`, which every role gate denies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    SuperAdmin,
    Teacher,
    Student,
    Parent,
    Compliance,
    Unknown,
}

impl Role {
    /// Case-insensitive parse. Never fails: an unrecognized value is a valid
    /// terminal state (`Unknown`), not a deserialization error.
    pub fn parse(value: &str) -> Role {
        match value.to_ascii_uppercase().as_str() {
            "ADMIN" => Role::Admin,
            "SUPER_ADMIN" => Role::SuperAdmin,
            "TEACHER" => Role::Teacher,
            "STUDENT" => Role::Student,
            "PARENT" => Role::Parent,
            "COMPLIANCE" => Role::Compliance,
            _ => Role::Unknown,
        }
    }

    /// Canonical wire form.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::Teacher => "TEACHER",
            Role::Student => "STUDENT",
            Role::Parent => "PARENT",
            Role::Compliance => "COMPLIANCE",
            Role::Unknown => "UNKNOWN",
        }
    }

    /// Human label for headers and the profile card.
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::SuperAdmin => "Super Administrator",
            Role::Teacher => "Teacher",
            Role::Student => "Student",
            Role::Parent => "Parent",
            Role::Compliance => "Compliance",
            Role::Unknown => "Unknown",
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Role::parse(&raw))
    }
}

/// An authenticated account as returned by `/auth/me` and embedded in the
/// login response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier (UUID string).
    pub id: String,
    /// Human-readable staff/student code, if assigned.
    #[serde(default)]
    pub code: Option<String>,
    /// Display name.
    pub full_name: String,
    /// Login email.
    pub email: String,
    /// Normalized role; see [`Role`].
    pub role: Role,
    /// Whether the account may sign in.
    pub is_active: bool,
}

/// Payload of a successful `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginData {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

/// Payload of a successful `POST /auth/refresh`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RefreshData {
    pub access_token: String,
}

/// Generic `{message}` payload used by logout and the password flows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageData {
    #[serde(default)]
    pub message: String,
}

/// Paging block attached to every list response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub items_per_page: u64,
    pub total_items: u64,
    pub current_page: u64,
    pub total_pages: u64,
}

/// A teaching-staff record in the admin module.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeacherRecord {
    pub id: String,
    #[serde(default)]
    pub code: Option<String>,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_school_teacher: bool,
    #[serde(default)]
    pub school_name: Option<String>,
    /// `PART_TIME` or `FULL_TIME`.
    #[serde(default)]
    pub employment_type: Option<String>,
    /// `ACTIVE` or `INACTIVE`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// An enrolled-student record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    #[serde(default)]
    pub code: Option<String>,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub guardian_phone: Option<String>,
    #[serde(default)]
    pub grade_level: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A scheduled class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub id: String,
    #[serde(default)]
    pub code: Option<String>,
    pub name: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub max_students: u64,
    /// `OPEN`, `CLOSED` or `CANCELLED`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub teacher_id: Option<String>,
}

/// A physical room.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub capacity: u64,
    #[serde(default)]
    pub location: Option<String>,
    /// `ACTIVE`, `MAINTENANCE` or `INACTIVE`.
    #[serde(default)]
    pub status: Option<String>,
}

/// `GET /teachers` payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeacherList {
    #[serde(default)]
    pub teachers: Vec<TeacherRecord>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// `GET /students` payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentList {
    #[serde(default)]
    pub students: Vec<StudentRecord>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// `GET /classes` payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassList {
    #[serde(default)]
    pub classes: Vec<ClassRecord>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// `GET /rooms` payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomList {
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub pagination: Pagination,
}
