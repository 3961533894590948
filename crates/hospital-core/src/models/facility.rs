//! Facility resources: inventory, beds, ambulances, blood bank.

use serde::{Deserialize, Serialize};

use super::{text_enum, today};

/// A stocked inventory item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryItem {
    /// Store-assigned identity, 0 until inserted.
    pub item_id: i64,
    /// Item name (required).
    pub item_name: String,
    /// Category, e.g. "Medicine", "Equipment".
    pub category: Option<String>,
    pub quantity: i64,
    /// Unit price in rupees.
    pub unit_price: Option<f64>,
    pub supplier: Option<String>,
    /// Last stock movement date (`%Y-%m-%d`).
    pub last_updated: String,
}

impl InventoryItem {
    pub fn new(item_name: String, quantity: i64) -> Self {
        Self {
            item_id: 0,
            item_name,
            category: None,
            quantity,
            unit_price: None,
            supplier: None,
            last_updated: today(),
        }
    }
}

text_enum! {
    /// Occupancy state of a bed.
    BedStatus {
        Available => "Available",
        Occupied => "Occupied",
    }
}

/// A ward bed.
///
/// `patient_id` and `admission_date` are set exactly when the bed is
/// `Occupied`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bed {
    /// Store-assigned identity, 0 until inserted.
    pub bed_id: i64,
    /// Bed label (required), e.g. "B-101".
    pub bed_number: String,
    /// Ward type, e.g. "General", "ICU".
    pub ward_type: Option<String>,
    pub status: BedStatus,
    /// Occupant reference, null while available.
    pub patient_id: Option<i64>,
    /// Admission date (`%Y-%m-%d`), null while available.
    pub admission_date: Option<String>,
}

impl Bed {
    /// Create a new bed in the `Available` state.
    pub fn new(bed_number: String, ward_type: Option<String>) -> Self {
        Self {
            bed_id: 0,
            bed_number,
            ward_type,
            status: BedStatus::Available,
            patient_id: None,
            admission_date: None,
        }
    }
}

text_enum! {
    /// Dispatch state of an ambulance.
    AmbulanceStatus {
        Available => "Available",
        OnDuty => "On Duty",
    }
}

/// A fleet ambulance.
///
/// The dispatch fields (`patient_id`, `pickup_location`, `destination`,
/// `request_time`) are set exactly when the ambulance is `OnDuty`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ambulance {
    /// Store-assigned identity, 0 until inserted.
    pub ambulance_id: i64,
    /// Vehicle registration (required).
    pub vehicle_number: String,
    /// Driver name (required).
    pub driver_name: String,
    pub status: AmbulanceStatus,
    pub patient_id: Option<i64>,
    pub pickup_location: Option<String>,
    pub destination: Option<String>,
    /// Dispatch timestamp (`%Y-%m-%d %H:%M:%S`), null while available.
    pub request_time: Option<String>,
}

impl Ambulance {
    /// Register a new ambulance in the `Available` state.
    pub fn new(vehicle_number: String, driver_name: String) -> Self {
        Self {
            ambulance_id: 0,
            vehicle_number,
            driver_name,
            status: AmbulanceStatus::Available,
            patient_id: None,
            pickup_location: None,
            destination: None,
            request_time: None,
        }
    }
}

/// A blood-bank donation entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BloodDonation {
    /// Store-assigned identity, 0 until inserted.
    pub blood_id: i64,
    pub blood_group: String,
    pub units: i64,
    /// Donor name (required).
    pub donor_name: String,
    /// Donation date (`%Y-%m-%d`), set at creation.
    pub donation_date: String,
    /// Expiry date, 90 days after donation.
    pub expiry_date: String,
}

impl BloodDonation {
    pub fn new(blood_group: String, units: i64, donor_name: String) -> Self {
        let donated = chrono::Local::now().date_naive();
        let expires = donated + chrono::Duration::days(90);
        Self {
            blood_id: 0,
            blood_group,
            units,
            donor_name,
            donation_date: donated.format("%Y-%m-%d").to_string(),
            expiry_date: expires.format("%Y-%m-%d").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bed_is_available() {
        let bed = Bed::new("B-999".into(), Some("General".into()));
        assert_eq!(bed.status, BedStatus::Available);
        assert!(bed.patient_id.is_none());
        assert!(bed.admission_date.is_none());
    }

    #[test]
    fn test_new_ambulance_has_no_dispatch_fields() {
        let amb = Ambulance::new("AMB-004".into(), "Test Driver".into());
        assert_eq!(amb.status, AmbulanceStatus::Available);
        assert!(amb.patient_id.is_none());
        assert!(amb.request_time.is_none());
    }

    #[test]
    fn test_on_duty_storage_string() {
        assert_eq!(AmbulanceStatus::OnDuty.as_str(), "On Duty");
        assert_eq!(
            "On Duty".parse::<AmbulanceStatus>().unwrap(),
            AmbulanceStatus::OnDuty
        );
    }

    #[test]
    fn test_donation_expiry_is_90_days_out() {
        let donation = BloodDonation::new("O+".into(), 2, "Donor".into());
        let donated =
            chrono::NaiveDate::parse_from_str(&donation.donation_date, "%Y-%m-%d").unwrap();
        let expires =
            chrono::NaiveDate::parse_from_str(&donation.expiry_date, "%Y-%m-%d").unwrap();
        assert_eq!(expires - donated, chrono::Duration::days(90));
    }
}
