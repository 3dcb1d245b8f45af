// Built-in FAQ table, used when FAQ_TABLE_PATH is not set.
// Longest matching pattern wins, so the refund pattern must stay the longest.

use super::FaqEntry;

fn entry(pattern: &str, answer: &str, confidence: f32, sources: &[&str]) -> FaqEntry {
    FaqEntry {
        pattern: pattern.to_string(),
        answer: answer.to_string(),
        confidence,
        sources: sources.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn builtin_entries() -> Vec<FaqEntry> {
    vec![
        entry(
            r"(refund|money back|reimburse|rembours|get my money)",
            "You can request a full refund within 14 days of purchase from the Orders page, as long as less than 30% of the course has been completed.",
            0.85,
            &["Refund Policy"],
        ),
        entry(
            r"(certificat|diploma|dipl[oô]me)",
            "A certificate is issued automatically once you complete every lesson and pass the final quiz. You can download it from your profile.",
            0.9,
            &["Certificates"],
        ),
        entry(
            r"(password|mot de passe|login|connexion)",
            "Use the \"Forgot password\" link on the sign-in page to receive a reset email. The link stays valid for one hour.",
            0.8,
            &["Account Help"],
        ),
        entry(
            r"\b(payment|paiement|pay|billing|invoice|factur)",
            "We accept credit cards and mobile money. Invoices are available under Settings > Billing after each payment.",
            0.8,
            &["Payments"],
        ),
        entry(
            r"(price|prix|cost|subscription|abonnement)",
            "Each course page shows its price. A monthly subscription also gives unlimited access to the whole catalog.",
            0.75,
            &["Pricing"],
        ),
        entry(
            r"\b(enrol|inscri|register|sign up)",
            "Open the course page and click \"Enroll\". Free courses start immediately; paid courses start after checkout.",
            0.8,
            &["Getting Started"],
        ),
        entry(
            r"(quiz|exam|assessment|évaluation)",
            "Each module ends with a quiz. You need 70% to pass and you can retake a quiz as many times as you like.",
            0.75,
            &["Quizzes"],
        ),
        entry(
            r"(progress|progression|avancement)",
            "Your progress is saved automatically. The dashboard shows completion per course and your recent activity.",
            0.75,
            &["Learning Dashboard"],
        ),
        entry(
            r"\b(cours|course)",
            "Browse the catalog to find courses by domain and level, or ask for personalized recommendations.",
            0.75,
            &["Course Catalog"],
        ),
        entry(
            r"\b(help|aide)\b",
            "I can answer questions about courses, enrollment, certificates, payments and refunds. What would you like to know?",
            0.75,
            &[],
        ),
        entry(
            r"(contact|support|human|humain)",
            "You can reach the support team at support@learning.local. We answer within one business day.",
            0.8,
            &["Contact"],
        ),
    ]
}

pub fn builtin_fallbacks() -> Vec<String> {
    [
        "I'm not sure I understood your question. Could you rephrase it?",
        "I don't have an answer for that yet. Try asking about courses, enrollment, certificates or payments.",
        "Sorry, I couldn't find anything on that topic. The support team can help if the question is urgent.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
