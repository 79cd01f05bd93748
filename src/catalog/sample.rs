//! Built-in demo catalog: the eye clinic's five doctors and eight symptoms.

use super::Catalog;
use crate::domain::model::{Doctor, Severity, Symptom, TimeSlot};

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn slots(days: &[u8], start: &str, end: &str) -> Vec<TimeSlot> {
    days.iter()
        .map(|&day| TimeSlot {
            day_of_week: day,
            start_time: start.to_string(),
            end_time: end.to_string(),
            is_available: true,
        })
        .collect()
}

struct Profile<'a> {
    email: &'a str,
    phone: &'a str,
    qualifications: &'a [&'a str],
    availability: Vec<TimeSlot>,
    fee: u32,
    bio: &'a str,
}

fn with_profile(mut doctor: Doctor, profile: Profile<'_>) -> Doctor {
    doctor.email = Some(profile.email.to_string());
    doctor.phone = Some(profile.phone.to_string());
    doctor.qualifications = labels(profile.qualifications);
    doctor.availability = profile.availability;
    doctor.consultation_fee = Some(profile.fee);
    doctor.bio = Some(profile.bio.to_string());
    doctor
}

fn described(mut symptom: Symptom, description: &str) -> Symptom {
    symptom.description = Some(description.to_string());
    symptom
}

pub fn sample_doctors() -> Vec<Doctor> {
    vec![
        with_profile(
            Doctor::new(
                "1",
                "Sarah",
                "Smith",
                labels(&["Retina Specialist", "Vitreoretinal Surgery"]),
                15,
                4.9,
            ),
            Profile {
                email: "dr.smith@eyeclinic.com",
                phone: "+1-555-0101",
                qualifications: &[
                    "MD",
                    "Fellowship in Vitreoretinal Surgery",
                    "Board Certified Ophthalmologist",
                ],
                availability: slots(&[1, 2, 3], "09:00", "17:00"),
                fee: 250,
                bio: "Specializing in complex retinal diseases and minimally invasive vitreoretinal surgery.",
            },
        ),
        with_profile(
            Doctor::new(
                "2",
                "Michael",
                "Johnson",
                labels(&["Glaucoma Specialist", "General Ophthalmology"]),
                12,
                4.8,
            ),
            Profile {
                email: "dr.johnson@eyeclinic.com",
                phone: "+1-555-0102",
                qualifications: &[
                    "MD",
                    "Fellowship in Glaucoma",
                    "Board Certified Ophthalmologist",
                ],
                availability: slots(&[1, 3, 5], "08:00", "16:00"),
                fee: 200,
                bio: "Expert in glaucoma management and advanced surgical techniques for pressure control.",
            },
        ),
        with_profile(
            Doctor::new(
                "3",
                "Lisa",
                "Chen",
                labels(&["Cornea Specialist", "Refractive Surgery"]),
                10,
                4.7,
            ),
            Profile {
                email: "dr.chen@eyeclinic.com",
                phone: "+1-555-0103",
                qualifications: &[
                    "MD",
                    "Fellowship in Cornea and External Disease",
                    "LASIK Certified",
                ],
                availability: [
                    slots(&[2, 4], "10:00", "18:00"),
                    slots(&[6], "09:00", "15:00"),
                ]
                .concat(),
                fee: 180,
                bio: "Specializing in corneal transplants, LASIK, and treatment of corneal diseases.",
            },
        ),
        with_profile(
            Doctor::new(
                "4",
                "Raj",
                "Patel",
                labels(&["Neuro-Ophthalmology", "Strabismus Specialist"]),
                18,
                4.9,
            ),
            Profile {
                email: "dr.patel@eyeclinic.com",
                phone: "+1-555-0104",
                qualifications: &[
                    "MD",
                    "Fellowship in Neuro-Ophthalmology",
                    "Pediatric Ophthalmology Certified",
                ],
                availability: slots(&[1, 4], "09:00", "17:00"),
                fee: 300,
                bio: "Expert in neurological eye disorders and complex eye movement abnormalities.",
            },
        ),
        with_profile(
            Doctor::new(
                "5",
                "Emily",
                "Brown",
                labels(&["General Ophthalmology", "Dry Eye Specialist"]),
                8,
                4.6,
            ),
            Profile {
                email: "dr.brown@eyeclinic.com",
                phone: "+1-555-0105",
                qualifications: &[
                    "MD",
                    "Board Certified Ophthalmologist",
                    "Dry Eye Therapy Certified",
                ],
                availability: slots(&[1, 2, 3, 4, 5], "08:00", "16:00"),
                fee: 150,
                bio: "Comprehensive eye care with expertise in dry eye management and routine eye health.",
            },
        ),
    ]
}

pub fn sample_symptoms() -> Vec<Symptom> {
    vec![
        described(
            Symptom::new(
                "1",
                "Blurred Vision",
                Severity::Moderate,
                "recent",
                labels(&["Refractive Surgery", "General Ophthalmology", "Retina Specialist"]),
            ),
            "Difficulty seeing clearly at distance or near",
        ),
        described(
            Symptom::new(
                "2",
                "Eye Pain",
                Severity::Severe,
                "acute",
                labels(&["Glaucoma Specialist", "Cornea Specialist", "General Ophthalmology"]),
            ),
            "Sharp or dull pain in or around the eye",
        ),
        described(
            Symptom::new(
                "3",
                "Red Eyes",
                Severity::Mild,
                "recent",
                labels(&["Cornea Specialist", "General Ophthalmology"]),
            ),
            "Redness in the white part of the eye",
        ),
        described(
            Symptom::new(
                "4",
                "Flashing Lights",
                Severity::Severe,
                "sudden",
                labels(&["Retina Specialist", "Vitreoretinal Surgery"]),
            ),
            "Seeing flashes of light or floaters",
        ),
        described(
            Symptom::new(
                "5",
                "Double Vision",
                Severity::Severe,
                "recent",
                labels(&["Neuro-Ophthalmology", "Strabismus Specialist"]),
            ),
            "Seeing two images of a single object",
        ),
        described(
            Symptom::new(
                "6",
                "Dry Eyes",
                Severity::Mild,
                "chronic",
                labels(&["Dry Eye Specialist", "General Ophthalmology"]),
            ),
            "Eyes feel dry, scratchy, or irritated",
        ),
        described(
            Symptom::new(
                "7",
                "Night Blindness",
                Severity::Moderate,
                "chronic",
                labels(&["Retina Specialist", "General Ophthalmology"]),
            ),
            "Difficulty seeing in low light conditions",
        ),
        described(
            Symptom::new(
                "8",
                "Halos Around Lights",
                Severity::Moderate,
                "recent",
                labels(&["Glaucoma Specialist", "Cornea Specialist"]),
            ),
            "Seeing bright circles around light sources",
        ),
    ]
}

pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_doctors(), sample_symptoms())
}
