//! Content scaffolds offered when starting a new entry.

use crate::storage::types::{Classification, Priority};

/// Starting content for a category's quick-action entry.
pub fn content_template(log_type: &str) -> Option<&'static str> {
    let template = match log_type {
        "MISSION_REPORT" => {
            "Mission Status Report:\n\nObjective: \nProgress: \nChallenges: \nNext Steps: \n\nRecommendations: "
        }
        "PERSONAL_LOG" => "Personal Log Entry:\n\nReflections on recent events...\n\n",
        "SYSTEM_STATUS" => {
            "System Status Report:\n\nPrimary Systems: \nSecondary Systems: \nMaintenance Required: \n\nTechnical Notes: "
        }
        "DIPLOMATIC_LOG" => {
            "Diplomatic Contact Report:\n\nSpecies/Entity: \nFirst Contact Protocol: \nCommunication Method: \nOutcome: \n\nCultural Notes: "
        }
        "SCIENTIFIC_LOG" => {
            "Scientific Discovery Log:\n\nPhenomenon Observed: \nHypothesis: \nTesting Results: \nConclusions: \n\nFurther Research: "
        }
        "SECURITY_ALERT" => {
            "Security Alert Report:\n\nThreat Level: \nNature of Threat: \nResponse Actions: \nResolution: \n\nRecommendations: "
        }
        "MEDICAL_LOG" => {
            "Medical Log Entry:\n\nPatient/Crew Status: \nSymptoms/Condition: \nTreatment: \nPrognosis: \n\nMedical Notes: "
        }
        _ => return None,
    };
    Some(template)
}

/// Defaults for an emergency entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPreset {
    pub log_type: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub priority: Priority,
    pub classification: Classification,
}

pub fn emergency() -> EntryPreset {
    EntryPreset {
        log_type: "MISSION_REPORT",
        title: "EMERGENCY LOG",
        content: "EMERGENCY SITUATION:\n\nNature of Emergency: \nImmediate Actions Taken: \nCurrent Status: \nAssistance Required: \n\nCommand Decision: ",
        priority: Priority::MAX,
        classification: Classification::Unclassified,
    }
}
