//! Question catalog
//!
//! The fixed set of statements shown to respondents: five per program,
//! compiled in. The catalog is deterministic; shuffling happens in the
//! survey session.

use crate::types::{Program, StudentStatus};
use serde::Serialize;

/// Number of statements per program
pub const QUESTIONS_PER_PROGRAM: usize = 5;

/// One statement in the survey together with the program it scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SurveyItem {
    pub program: Program,
    pub question: &'static str,
}

impl Program {
    /// The five statements for this program, in catalog order
    pub fn questions(&self) -> &'static [&'static str; QUESTIONS_PER_PROGRAM] {
        match self {
            Program::BsComputerScience => &[
                "I am intrigued by the inner workings of computers and algorithms.",
                "I am enthusiastic about solving complex problems using programming.",
                "I am drawn to the idea of designing efficient computational systems.",
                "I am inquisitive and methodical, driven by the desire to uncover the mechanics behind digital systems.",
                "I am tenacious and analytical, finding joy in solving complex puzzles and logical challenges.",
            ],
            Program::BsCybersecurity => &[
                "I am interested in protecting digital information from unauthorized access.",
                "I am passionate about understanding and thwarting cyber threats.",
                "I am committed to maintaining the integrity and confidentiality of digital data.",
                "I am vigilant and detail-oriented, committed to maintaining the integrity of confidential systems.",
                "I value trust and discretion, ensuring safety in every online interaction.",
            ],
            Program::BsDataAnalytics => &[
                "I am fascinated by the power of data to reveal insights and drive decisions.",
                "I am eager to apply statistical techniques to interpret large data sets.",
                "I am inclined towards transforming raw data into meaningful information.",
                "I am curious and precise, with a knack for finding meaning in abstract information.",
                "I prioritize clarity and insight, striving to turn raw numbers into actionable knowledge.",
            ],
            Program::BsNetworkEngineering => &[
                "I am keen on designing and managing secure computer networks.",
                "I am attracted to the complexity of ensuring seamless communication between devices.",
                "I am determined to build resilient network infrastructures.",
                "I am resourceful and adaptive, thriving on the ever-changing landscape of interconnected systems.",
                "I am systematic and vigilant, specifically ensuring the reliability and integrity of connections across various platforms.",
            ],
            Program::BsSoftwareEngineering => &[
                "I am excited about creating high-quality software that meets user needs.",
                "I am motivated by the challenge of developing and maintaining robust software systems.",
                "I am devoted to applying engineering principles to software development.",
                "I am creative and resilient, driven to find unique solutions to intricate challenges.",
                "I am methodical and attentive, dedicated to building flawless digital tools.",
            ],
            Program::BsCloudComputing => &[
                "I am drawn to the potential of cloud platforms in hosting and managing services.",
                "I am curious about optimizing resource usage in distributed environments.",
                "I am interested in exploring the scalability and flexibility of cloud solutions.",
                "I am proactive and visionary, eager to explore the horizons of scalable online solutions.",
                "I am adaptable and forward-thinking, staying ahead of shifts in virtual infrastructure.",
            ],
            Program::BsInformationTechnology => &[
                "I am enthusiastic about integrating technology to support organizational goals.",
                "I am inclined to understand how technology interfaces with business processes.",
                "I am focused on leveraging technology to solve real-world challenges.",
                "I am pragmatic and solution-oriented, making technology serve people's unique needs.",
                "I am a mediator, bridging the gap between technical complexity and everyday use.",
            ],
            Program::MsCybersecurity => &[
                "I am committed to advancing my knowledge in cybersecurity and risk management.",
                "I am interested in the strategic aspects of information assurance in organizations.",
                "I am dedicated to contributing to the field of cybersecurity through research and practice.",
                "I am committed to principles, deepening my expertise to ensure online safety and privacy.",
                "I prioritize proactive thinking, always ready to defend against unseen threats.",
            ],
            Program::MsDataAnalytics => &[
                "I am passionate about diving deeper into data-driven decision-making processes.",
                "I am eager to explore advanced techniques in machine learning and data mining.",
                "I am focused on uncovering hidden patterns in complex data sets.",
                "I am investigative and discerning, driven to make sense of multifaceted information.",
                "I am relentless and insightful, digging deep to reveal hidden truths in the data.",
            ],
            Program::MsItManagement => &[
                "I am interested in leading technology projects and aligning IT with business strategy.",
                "I am inclined towards understanding the managerial aspects of information technology.",
                "I am driven to enhance my leadership skills in managing technology and innovation.",
                "I have a leadership mindset, aligning technological innovation with organizational goals.",
                "I am adept at bridging diverse teams, ensuring seamless collaboration across different domains.",
            ],
        }
    }

    /// Whether `question` is one of this program's statements
    pub fn has_question(&self, question: &str) -> bool {
        self.questions().contains(&question)
    }
}

/// Programs offered for a status, in catalog order
pub fn programs_for(status: StudentStatus) -> Vec<Program> {
    Program::for_status(status).collect()
}

/// Flattened (program, statement) pairs for every program matching `status`.
///
/// Order is catalog order: programs as declared, statements as listed.
pub fn questions_for(status: StudentStatus) -> Vec<SurveyItem> {
    items_for_programs(&programs_for(status))
}

/// Flatten the statements of `programs`, preserving the given program order
pub fn items_for_programs(programs: &[Program]) -> Vec<SurveyItem> {
    programs
        .iter()
        .flat_map(|&program| {
            program
                .questions()
                .iter()
                .map(move |&question| SurveyItem { program, question })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_undergraduate_questions() {
        let items = questions_for(StudentStatus::Undergraduate);
        assert_eq!(items.len(), 35);
        assert!(items.iter().all(|i| i.program.tier() == StudentStatus::Undergraduate));
        let programs: HashSet<Program> = items.iter().map(|i| i.program).collect();
        assert_eq!(programs.len(), 7);
    }

    #[test]
    fn test_graduate_questions() {
        let items = questions_for(StudentStatus::Graduate);
        assert_eq!(items.len(), 15);
        let programs: HashSet<Program> = items.iter().map(|i| i.program).collect();
        assert_eq!(
            programs,
            HashSet::from([
                Program::MsCybersecurity,
                Program::MsDataAnalytics,
                Program::MsItManagement
            ])
        );
    }

    #[test]
    fn test_catalog_order_is_preserved() {
        let items = questions_for(StudentStatus::Graduate);
        assert_eq!(items[0].program, Program::MsCybersecurity);
        assert_eq!(
            items[0].question,
            "I am committed to advancing my knowledge in cybersecurity and risk management."
        );
        assert_eq!(items[14].program, Program::MsItManagement);
    }

    #[test]
    fn test_statements_are_unique() {
        let all: Vec<&str> = Program::iter()
            .flat_map(|p| p.questions().iter().copied())
            .collect();
        let unique: HashSet<&str> = all.iter().copied().collect();
        assert_eq!(all.len(), 50);
        assert_eq!(unique.len(), 50);
    }

    #[test]
    fn test_has_question() {
        let q = Program::BsCloudComputing.questions()[2];
        assert!(Program::BsCloudComputing.has_question(q));
        assert!(!Program::BsComputerScience.has_question(q));
    }
}
