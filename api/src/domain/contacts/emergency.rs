#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmergencyContact {
    pub name: &'static str,
    pub number: &'static str,
}

pub const EMERGENCY_CONTACTS: [EmergencyContact; 5] = [
    EmergencyContact {
        name: "Emergency Services",
        number: "911",
    },
    EmergencyContact {
        name: "Poison Control",
        number: "1-800-222-1222",
    },
    EmergencyContact {
        name: "Suicide Prevention Lifeline",
        number: "988",
    },
    EmergencyContact {
        name: "HealthCare Connect Support",
        number: "1-800-HEALTH",
    },
    EmergencyContact {
        name: "Mental Health Crisis",
        number: "1-800-950-NAMI",
    },
];
