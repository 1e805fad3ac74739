use clinic_registry_data::models as data;

use crate::entities::doctor::{CreateDoctorRequest, Doctor};
use crate::entities::patient::{CreatePatientRequest, Patient};

/// Conversion functions between domain entities and data models
/// These functions follow the pattern convert_to_[target_layer]_[model_name]

/// Convert from data model to domain entity for a patient
pub fn convert_to_domain_patient(patient: data::Patient) -> Patient {
    Patient {
        id: patient.id,
        name: patient.name,
        age: patient.age,
        health: patient.health,
    }
}

/// Convert from domain create request to the data insert model for a patient
pub fn convert_to_data_new_patient(request: CreatePatientRequest) -> data::NewPatient {
    data::NewPatient {
        name: request.name,
        age: request.age,
        health: request.health,
    }
}

/// Convert from data model to domain entity for a doctor
pub fn convert_to_domain_doctor(doctor: data::Doctor) -> Doctor {
    Doctor {
        id: doctor.id,
        name: doctor.name,
        specialty: doctor.specialty,
        experience: doctor.experience,
    }
}

/// Convert from domain create request to the data insert model for a doctor
pub fn convert_to_data_new_doctor(request: CreateDoctorRequest) -> data::NewDoctor {
    data::NewDoctor {
        name: request.name,
        specialty: request.specialty,
        experience: request.experience,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_conversions_keep_every_field() {
        let request = CreatePatientRequest {
            name: "Jane Doe".to_string(),
            age: 34,
            health: "stable".to_string(),
        };

        let stored = convert_to_data_new_patient(request.clone()).into_patient(7);
        let patient = convert_to_domain_patient(stored);

        assert_eq!(patient.id, 7);
        assert_eq!(patient.name, request.name);
        assert_eq!(patient.age, request.age);
        assert_eq!(patient.health, request.health);
    }

    #[test]
    fn test_doctor_conversions_keep_every_field() {
        let request = CreateDoctorRequest {
            name: "Gregory House".to_string(),
            specialty: "Diagnostics".to_string(),
            experience: 20,
        };

        let doctor = convert_to_domain_doctor(convert_to_data_new_doctor(request.clone()).into_doctor(3));

        assert_eq!(doctor.id, 3);
        assert_eq!(doctor.name, request.name);
        assert_eq!(doctor.specialty, request.specialty);
        assert_eq!(doctor.experience, request.experience);
    }
}
