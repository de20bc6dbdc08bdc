use serde::Serialize;

/// A personality cluster the downstream classifier can predict.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClusterProfile {
    pub id: u8,
    pub name: &'static str,
    pub description: &'static str,
}

pub static CLUSTERS: [ClusterProfile; 5] = [
    ClusterProfile {
        id: 0,
        name: "Balanced Collaborator",
        description: "Steady and cooperative, stays calm under pressure and keeps group work \
            predictable. Strengths: reliability, emotional stability, organization. \
            Growth areas: reluctance to take bold risks or leave familiar routines. \
            Career fit: project coordination, HR support, operations, customer service, \
            administration.",
    },
    ClusterProfile {
        id: 1,
        name: "Reserved Analyzer",
        description: "Quiet, detail-focused and careful, prefers independent work and notices \
            risks others miss. Strengths: analytical thinking, caution, independence. \
            Growth areas: overthinking, stress in fast-paced or highly social settings. \
            Career fit: research, writing, data entry, quality control, back-office roles.",
    },
    ClusterProfile {
        id: 2,
        name: "Calm Problem-Solver",
        description: "Practical and composed, pairs creative thinking with emotional stability \
            and favours structured problem-solving. Strengths: steady decisions, grounded \
            creativity, logical reasoning. Growth areas: communicating ideas and asserting \
            them in groups. Career fit: UX research, engineering support, IT troubleshooting, \
            product analysis, design support.",
    },
    ClusterProfile {
        id: 3,
        name: "Supportive Team Member",
        description: "Warm and friendly, values harmony and keeps the team atmosphere calm. \
            Strengths: empathy, teamwork, patience. Growth areas: avoiding conflict and \
            holding back opinions. Career fit: customer service, community engagement, \
            teaching assistance, team coordination.",
    },
    ClusterProfile {
        id: 4,
        name: "Creative Explorer",
        description: "Imaginative and expressive, enjoys flexible environments and new ideas \
            with strong emotional awareness. Strengths: originality, idea generation, \
            empathy. Growth areas: consistency and coping with stress without clear \
            structure. Career fit: marketing, design, content creation, creative strategy, \
            the arts.",
    },
];

pub fn cluster_profile(id: u8) -> Option<&'static ClusterProfile> {
    CLUSTERS.iter().find(|c| c.id == id)
}
