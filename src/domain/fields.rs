// ============================================================
// PROFILE FIELD NAMES
// ============================================================
// Closed enumeration of the well-known profile columns

/// Well-known profile field names coming from the CSV header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    ProfileName,
    AccEmail,
    Fname,
    Lname,
    FullName,
    Uuid,
    AddressAddress,
    AddressCity,
    AddressState,
    AddressZip,
    Tel,
    TmPass,
    VisaNum,
    VisaExp,
    AmexNum,
    AmexExp,
}

impl ProfileField {
    /// Column name as it appears in the CSV header and storage blobs
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::ProfileName => "profile_name",
            ProfileField::AccEmail => "acc_email",
            ProfileField::Fname => "fname",
            ProfileField::Lname => "lname",
            ProfileField::FullName => "full_name",
            ProfileField::Uuid => "uuid",
            ProfileField::AddressAddress => "address_address",
            ProfileField::AddressCity => "address_city",
            ProfileField::AddressState => "address_state",
            ProfileField::AddressZip => "address_zip",
            ProfileField::Tel => "tel",
            ProfileField::TmPass => "tm_pass",
            ProfileField::VisaNum => "visa_num",
            ProfileField::VisaExp => "visa_exp",
            ProfileField::AmexNum => "amex_num",
            ProfileField::AmexExp => "amex_exp",
        }
    }
}

/// Fields shown by the display projector, in presentation order
pub const DISPLAY_FIELDS: [ProfileField; 14] = [
    ProfileField::ProfileName,
    ProfileField::AccEmail,
    ProfileField::Fname,
    ProfileField::Lname,
    ProfileField::FullName,
    ProfileField::AddressAddress,
    ProfileField::AddressCity,
    ProfileField::AddressState,
    ProfileField::AddressZip,
    ProfileField::Tel,
    ProfileField::VisaNum,
    ProfileField::VisaExp,
    ProfileField::AmexNum,
    ProfileField::AmexExp,
];
