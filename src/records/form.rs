use std::path::PathBuf;

use chrono::{Local, NaiveDate, NaiveTime};
use thiserror::Error;

pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Pria,
    Wanita,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Pria => "Pria",
            Gender::Wanita => "Wanita",
        }
    }

    fn toggle(self) -> Self {
        match self {
            Gender::Pria => Gender::Wanita,
            Gender::Wanita => Gender::Pria,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Hobby {
    Membaca,
    Olahraga,
    Musik,
    Traveling,
}

impl Hobby {
    pub const ALL: [Hobby; 4] = [Hobby::Membaca, Hobby::Olahraga, Hobby::Musik, Hobby::Traveling];

    pub fn label(self) -> &'static str {
        match self {
            Hobby::Membaca => "Membaca",
            Hobby::Olahraga => "Olahraga",
            Hobby::Musik => "Musik",
            Hobby::Traveling => "Traveling",
        }
    }
}

/// Editable fields of the user form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Address,
    Age,
    BirthDate,
    Appointment,
    Gender,
    Hobbies,
    Color,
    PhotoUpload,
    CameraCapture,
    Rating,
}

impl FormField {
    pub const ALL: [FormField; 11] = [
        FormField::Name,
        FormField::Address,
        FormField::Age,
        FormField::BirthDate,
        FormField::Appointment,
        FormField::Gender,
        FormField::Hobbies,
        FormField::Color,
        FormField::PhotoUpload,
        FormField::CameraCapture,
        FormField::Rating,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Nama",
            FormField::Address => "Alamat",
            FormField::Age => "Usia",
            FormField::BirthDate => "Tanggal Lahir",
            FormField::Appointment => "Waktu Janjian",
            FormField::Gender => "Jenis Kelamin",
            FormField::Hobbies => "Hobi",
            FormField::Color => "Warna Favorit",
            FormField::PhotoUpload => "Upload Foto",
            FormField::CameraCapture => "Foto Kamera",
            FormField::Rating => "Rating Kepuasan",
        }
    }

    /// Choice fields are changed with left/right instead of typing.
    pub fn is_choice(self) -> bool {
        matches!(self, FormField::Gender | FormField::Hobbies | FormField::Rating)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Usia must be a whole number of at least 0 (got `{0}`)")]
    InvalidAge(String),
    #[error("Tanggal Lahir must be YYYY-MM-DD (got `{0}`)")]
    InvalidDate(String),
    #[error("Waktu Janjian must be HH:MM (got `{0}`)")]
    InvalidTime(String),
    #[error("Warna Favorit must be #RRGGBB (got `{0}`)")]
    InvalidColor(String),
}

impl FieldError {
    pub fn field(&self) -> FormField {
        match self {
            FieldError::InvalidAge(_) => FormField::Age,
            FieldError::InvalidDate(_) => FormField::BirthDate,
            FieldError::InvalidTime(_) => FormField::Appointment,
            FieldError::InvalidColor(_) => FormField::Color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoSource {
    Upload(PathBuf),
    Camera(PathBuf),
}

impl PhotoSource {
    pub fn caption(&self) -> &'static str {
        match self {
            PhotoSource::Upload(_) => "Foto yang Diupload",
            PhotoSource::Camera(_) => "Foto dari Kamera",
        }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            PhotoSource::Upload(path) | PhotoSource::Camera(path) => path,
        }
    }
}

/// In-progress form contents; text fields hold raw input until submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub address: String,
    pub age: String,
    pub birth_date: String,
    pub appointment: String,
    pub gender: Gender,
    pub hobbies: Vec<Hobby>,
    /// Cursor within the hobby options.
    pub hobby_cursor: usize,
    pub color: String,
    pub photo_upload: String,
    pub camera_capture: String,
    pub rating: u8,
}

impl FormDraft {
    pub fn new(today: NaiveDate, now: NaiveTime) -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            age: "0".to_string(),
            birth_date: today.format("%Y-%m-%d").to_string(),
            appointment: now.format("%H:%M").to_string(),
            gender: Gender::Pria,
            hobbies: Vec::new(),
            hobby_cursor: 0,
            color: "#000000".to_string(),
            photo_upload: String::new(),
            camera_capture: String::new(),
            rating: RATING_MIN,
        }
    }

    pub fn starting_now() -> Self {
        let now = Local::now();
        Self::new(now.date_naive(), now.time())
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Address => Some(&mut self.address),
            FormField::Age => Some(&mut self.age),
            FormField::BirthDate => Some(&mut self.birth_date),
            FormField::Appointment => Some(&mut self.appointment),
            FormField::Color => Some(&mut self.color),
            FormField::PhotoUpload => Some(&mut self.photo_upload),
            FormField::CameraCapture => Some(&mut self.camera_capture),
            FormField::Gender | FormField::Hobbies | FormField::Rating => None,
        }
    }

    pub fn push_char(&mut self, field: FormField, ch: char) {
        if field == FormField::Age && !ch.is_ascii_digit() {
            return;
        }
        if let Some(text) = self.text_mut(field) {
            text.push(ch);
        }
    }

    pub fn pop_char(&mut self, field: FormField) {
        if let Some(text) = self.text_mut(field) {
            text.pop();
        }
    }

    /// Step a choice field forward (`true`) or backward.
    pub fn step_choice(&mut self, field: FormField, forward: bool) {
        match field {
            FormField::Gender => self.gender = self.gender.toggle(),
            FormField::Hobbies => {
                let len = Hobby::ALL.len();
                self.hobby_cursor = if forward {
                    (self.hobby_cursor + 1) % len
                } else {
                    (self.hobby_cursor + len - 1) % len
                };
            }
            FormField::Rating => {
                self.rating = if forward {
                    (self.rating + 1).min(RATING_MAX)
                } else {
                    self.rating.saturating_sub(1).max(RATING_MIN)
                };
            }
            _ => {}
        }
    }

    /// Toggle the hobby under the cursor; selected hobbies stay in option order.
    pub fn toggle_hobby(&mut self) {
        let hobby = Hobby::ALL[self.hobby_cursor % Hobby::ALL.len()];
        if let Some(pos) = self.hobbies.iter().position(|h| *h == hobby) {
            self.hobbies.remove(pos);
        } else {
            self.hobbies.push(hobby);
            self.hobbies.sort();
        }
    }

    /// Current value of a field as shown in the form.
    pub fn display_value(&self, field: FormField) -> String {
        match field {
            FormField::Name => self.name.clone(),
            FormField::Address => self.address.clone(),
            FormField::Age => self.age.clone(),
            FormField::BirthDate => self.birth_date.clone(),
            FormField::Appointment => self.appointment.clone(),
            FormField::Gender => [Gender::Pria, Gender::Wanita]
                .iter()
                .map(|g| {
                    let mark = if *g == self.gender { "(•)" } else { "( )" };
                    format!("{mark} {}", g.label())
                })
                .collect::<Vec<_>>()
                .join("  "),
            FormField::Hobbies => Hobby::ALL
                .iter()
                .enumerate()
                .map(|(idx, hobby)| {
                    let mark = if self.hobbies.contains(hobby) { "[x]" } else { "[ ]" };
                    let label = format!("{mark} {}", hobby.label());
                    if idx == self.hobby_cursor {
                        format!("›{label}")
                    } else {
                        format!(" {label}")
                    }
                })
                .collect::<Vec<_>>()
                .join(" "),
            FormField::Color => self.color.clone(),
            FormField::PhotoUpload => self.photo_upload.clone(),
            FormField::CameraCapture => self.camera_capture.clone(),
            FormField::Rating => format!("{}/{}", self.rating, RATING_MAX),
        }
    }

    /// Validate every field at once. Nothing is produced unless all fields are valid.
    pub fn submit(&self) -> Result<Submission, Vec<FieldError>> {
        let mut errors = Vec::new();

        let age = match self.age.trim().parse::<u32>() {
            Ok(age) => Some(age),
            Err(_) => {
                errors.push(FieldError::InvalidAge(self.age.clone()));
                None
            }
        };
        let birth_date = match NaiveDate::parse_from_str(self.birth_date.trim(), "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(FieldError::InvalidDate(self.birth_date.clone()));
                None
            }
        };
        let appointment = match NaiveTime::parse_from_str(self.appointment.trim(), "%H:%M") {
            Ok(time) => Some(time),
            Err(_) => {
                errors.push(FieldError::InvalidTime(self.appointment.clone()));
                None
            }
        };
        let color = match normalize_color(&self.color) {
            Some(color) => Some(color),
            None => {
                errors.push(FieldError::InvalidColor(self.color.clone()));
                None
            }
        };

        match (age, birth_date, appointment, color) {
            (Some(age), Some(birth_date), Some(appointment), Some(color)) if errors.is_empty() => {
                Ok(Submission {
                    name: self.name.trim().to_string(),
                    address: self.address.trim().to_string(),
                    age,
                    birth_date,
                    appointment,
                    gender: self.gender,
                    hobbies: self.hobbies.clone(),
                    color,
                    photo_upload: non_empty_path(&self.photo_upload),
                    camera_capture: non_empty_path(&self.camera_capture),
                    rating: self.rating.clamp(RATING_MIN, RATING_MAX),
                })
            }
            _ => Err(errors),
        }
    }
}

fn non_empty_path(raw: &str) -> Option<PathBuf> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

/// Accept `#rrggbb` in any case; returned lowercase.
fn normalize_color(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let hex = trimmed.strip_prefix('#')?;
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(format!("#{}", hex.to_ascii_lowercase()))
    } else {
        None
    }
}

/// Validated form contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub address: String,
    pub age: u32,
    pub birth_date: NaiveDate,
    pub appointment: NaiveTime,
    pub gender: Gender,
    pub hobbies: Vec<Hobby>,
    pub color: String,
    pub photo_upload: Option<PathBuf>,
    pub camera_capture: Option<PathBuf>,
    pub rating: u8,
}

impl Submission {
    pub fn success_message(&self) -> String {
        format!("Data atas nama **{}** berhasil dikirim! 🎉", self.name)
    }

    pub fn echo_lines(&self) -> Vec<String> {
        let hobbies = self
            .hobbies
            .iter()
            .map(|h| h.label())
            .collect::<Vec<_>>()
            .join(", ");
        vec![
            format!("- Alamat: {}", self.address),
            format!("- Usia: {} tahun", self.age),
            format!("- Tanggal Lahir: {}", self.birth_date.format("%Y-%m-%d")),
            format!("- Waktu Janjian: {}", self.appointment.format("%H:%M:%S")),
            format!("- Jenis Kelamin: {}", self.gender.label()),
            format!("- Hobi: {}", hobbies),
            format!("- Warna Favorit: {}", self.color),
            format!("- Rating Kepuasan: {}/{}", self.rating, RATING_MAX),
        ]
    }

    /// The uploaded photo wins over the camera capture.
    pub fn photo(&self) -> Option<PhotoSource> {
        self.photo_upload
            .clone()
            .map(PhotoSource::Upload)
            .or_else(|| self.camera_capture.clone().map(PhotoSource::Camera))
    }
}
