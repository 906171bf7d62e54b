//! Read-only sample records typed into the demo pages.

/// Text-box form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactRecord {
    pub full_name: &'static str,
    pub email: &'static str,
    pub current_address: &'static str,
    pub permanent_address: &'static str,
}

pub const CONTACT: ContactRecord = ContactRecord {
    full_name: "John Doe",
    email: "johndoe@example.com",
    current_address: "123 Main Street, City",
    permanent_address: "456 Park Avenue, Town",
};

/// One row of the web-tables registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRecord {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub age: &'static str,
    pub salary: &'static str,
    pub department: &'static str,
}

impl TableRecord {
    /// Registration form field ids paired with this record's values.
    pub fn fields(&self) -> [(&'static str, &'static str); 6] {
        [
            ("#firstName", self.first_name),
            ("#lastName", self.last_name),
            ("#userEmail", self.email),
            ("#age", self.age),
            ("#salary", self.salary),
            ("#department", self.department),
        ]
    }
}

pub const NEW_TABLE_RECORD: TableRecord = TableRecord {
    first_name: "Michael",
    last_name: "Smith",
    email: "michaelsmith@example.com",
    age: "35",
    salary: "6000",
    department: "QA",
};

pub const EDITED_TABLE_RECORD: TableRecord = TableRecord {
    first_name: "Michael",
    last_name: "Johnson",
    email: "michaeljohnson@example.com",
    age: "36",
    salary: "7000",
    department: "Development",
};

/// Practice-form student registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentRecord {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub gender: Gender,
    pub mobile: &'static str,
    /// As typed into the date picker.
    pub date_of_birth: &'static str,
    /// As the confirmation table renders it.
    pub date_of_birth_display: &'static str,
    pub subject: &'static str,
    pub hobby: Hobby,
    pub current_address: &'static str,
    pub state: &'static str,
    pub city: &'static str,
}

impl StudentRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// Id of the radio input; its `<label>` is what receives the click.
    pub fn input_id(self) -> &'static str {
        match self {
            Gender::Male => "gender-radio-1",
            Gender::Female => "gender-radio-2",
            Gender::Other => "gender-radio-3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hobby {
    Sports,
    Reading,
    Music,
}

impl Hobby {
    pub fn label(self) -> &'static str {
        match self {
            Hobby::Sports => "Sports",
            Hobby::Reading => "Reading",
            Hobby::Music => "Music",
        }
    }

    pub fn input_id(self) -> &'static str {
        match self {
            Hobby::Sports => "hobbies-checkbox-1",
            Hobby::Reading => "hobbies-checkbox-2",
            Hobby::Music => "hobbies-checkbox-3",
        }
    }
}

pub const STUDENT: StudentRecord = StudentRecord {
    first_name: "Vasiliy",
    last_name: "Pupkin",
    email: "vasyapupkin@gmail.com",
    gender: Gender::Male,
    mobile: "1112223344",
    date_of_birth: "30 Mar 2010",
    date_of_birth_display: "30 March,2010",
    subject: "Economics",
    hobby: Hobby::Reading,
    current_address: "Netaji Subhash Marg, Lal Qila, Chandni Chowk, New Delhi",
    state: "NCR",
    city: "Delhi",
};

/// Content written to the temporary upload file.
pub const UPLOAD_FILE_NAME: &str = "test_upload.txt";
pub const UPLOAD_FILE_CONTENT: &str = "This is a test file content for upload testing.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_changes_email() {
        assert_ne!(NEW_TABLE_RECORD.email, EDITED_TABLE_RECORD.email);
        assert_eq!(NEW_TABLE_RECORD.first_name, EDITED_TABLE_RECORD.first_name);
    }

    #[test]
    fn test_table_fields_cover_form() {
        let fields = EDITED_TABLE_RECORD.fields();
        assert_eq!(fields[2], ("#userEmail", "michaeljohnson@example.com"));
        assert_eq!(fields[5], ("#department", "Development"));
    }

    #[test]
    fn test_student_mobile_is_ten_digits() {
        assert_eq!(STUDENT.mobile.len(), 10);
        assert!(STUDENT.mobile.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(STUDENT.full_name(), "Vasiliy Pupkin");
    }
}
