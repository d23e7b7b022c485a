//! Intent classification for assistant requests.
//!
//! Rules are checked in declaration order of `Intent`; the first that fires wins.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    EmailTemplate,
    InterviewQuestions,
    JobDescription,
    FeedbackSummary,
    Unknown,
}

pub fn classify(input: &str) -> Intent {
    let text = input.to_lowercase();
    let has = |word: &str| text.contains(word);

    if has("email") || has("message") {
        Intent::EmailTemplate
    } else if has("interview") && has("question") {
        Intent::InterviewQuestions
    } else if has("job") && (has("description") || has("posting")) {
        Intent::JobDescription
    } else if has("feedback") || has("candidate") || has("summary") {
        Intent::FeedbackSummary
    } else {
        Intent::Unknown
    }
}

impl Intent {
    pub fn reply(&self) -> &'static str {
        match self {
            Intent::EmailTemplate => EMAIL_TEMPLATE,
            Intent::InterviewQuestions => INTERVIEW_QUESTIONS,
            Intent::JobDescription => JOB_DESCRIPTION,
            Intent::FeedbackSummary => FEEDBACK_SUMMARY,
            Intent::Unknown => {
                "I understand you need help with that. Could you provide more specific information about what you need?"
            }
        }
    }
}

const EMAIL_TEMPLATE: &str = "Dear [Candidate Name],

Thank you for applying to the [Position] role at [Company]. We were impressed by your background and would like to invite you for an interview on [Date] at [Time].

Please let us know if this works for you, and we can provide further details about the interview process.

Best regards,
[Your Name]
Recruiter at RecrutementPlus";

const INTERVIEW_QUESTIONS: &str = "1. Can you tell me about your previous experience with similar projects?
2. How do you handle tight deadlines and competing priorities?
3. Describe a challenging situation you faced at work and how you resolved it.
4. What are your strengths and areas for improvement in relation to this role?
5. Why are you interested in working with our client company?";

const JOB_DESCRIPTION: &str = "Job Title: Frontend Developer

About the Company:
[Company] is a leading technology firm specializing in innovative digital solutions for enterprise clients. We are seeking a talented Frontend Developer to join our growing team.

Responsibilities:
- Develop and maintain responsive web applications
- Collaborate with designers and backend developers
- Optimize applications for maximum speed and scalability
- Ensure cross-browser compatibility and responsive design

Requirements:
- 3+ years experience with HTML, CSS, and JavaScript
- Proficiency in React.js or similar frontend frameworks
- Experience with responsive design and cross-browser compatibility
- Strong problem-solving skills and attention to detail

Benefits:
- Competitive salary
- Flexible working hours
- Professional development opportunities
- Collaborative and innovative work environment";

const FEEDBACK_SUMMARY: &str = "Candidate Name: John Smith
Position: Project Manager

Strengths:
- Excellent communication skills
- Strong experience leading cross-functional teams
- Demonstrated ability to deliver projects on time and within budget

Areas for Improvement:
- Technical knowledge could be stronger in some areas
- May benefit from more experience with agile methodologies

Overall Assessment:
4/5 - Strong candidate with great potential. Recommended for second interview.";
