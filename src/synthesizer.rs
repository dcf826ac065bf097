use chrono::{DateTime, Utc};

use crate::api::models::{Metadata, PolicyType, ScrapedDocument, Section};
use crate::classifier::Category;

struct Template {
    title: &'static str,
    sections: &'static [(&'static str, &'static str)],
    // Fixed literal; intentionally not derived from the section text.
    word_count: u32,
    policy_type: PolicyType,
    jurisdiction: &'static str,
}

const GDPR: Template = Template {
    title: "GDPR Privacy Policy Analysis",
    sections: &[
        (
            "Data Processing Principles",
            "Under GDPR Article 5, personal data shall be processed lawfully, fairly, and transparently. The data controller must ensure that processing is limited to specified, explicit, and legitimate purposes.",
        ),
        (
            "Data Minimization",
            "Personal data shall be adequate, relevant, and limited to what is necessary in relation to the purposes for which they are processed. This principle ensures that organizations only collect data that is essential for their stated purposes.",
        ),
        (
            "Storage Limitation",
            "Personal data shall be kept in a form which permits identification of data subjects for no longer than is necessary for the purposes for which the personal data are processed.",
        ),
        (
            "Data Security",
            "Personal data shall be processed in a manner that ensures appropriate security, including protection against unauthorized or unlawful processing and against accidental loss, destruction, or damage.",
        ),
        (
            "Accountability",
            "The controller shall be responsible for, and be able to demonstrate compliance with, the data protection principles outlined in GDPR Article 5.",
        ),
    ],
    word_count: 312,
    policy_type: PolicyType::Gdpr,
    jurisdiction: "EU",
};

const EDUCATION: Template = Template {
    title: "Educational Institution Privacy Policy",
    sections: &[
        (
            "FERPA Compliance",
            "Educational institutions must comply with the Family Educational Rights and Privacy Act (FERPA), which protects the privacy of student education records. Schools must obtain written consent before disclosing personally identifiable information.",
        ),
        (
            "Student Data Protection",
            "Student records, including grades, attendance, and personal information, are protected under FERPA. Parents have the right to access and request corrections to their child's education records.",
        ),
        (
            "Directory Information",
            "Schools may disclose directory information without consent unless parents opt out. Directory information typically includes name, address, phone number, and enrollment status.",
        ),
        (
            "Technology Use",
            "Educational technology must comply with both FERPA and state-specific privacy laws. Schools must ensure that third-party vendors handling student data maintain appropriate security measures.",
        ),
    ],
    word_count: 298,
    policy_type: PolicyType::Ferpa,
    jurisdiction: "US",
};

const HEALTH: Template = Template {
    title: "Healthcare Privacy Policy",
    sections: &[
        (
            "HIPAA Compliance",
            "Healthcare organizations must comply with the Health Insurance Portability and Accountability Act (HIPAA), which protects the privacy and security of health information. Covered entities must implement appropriate safeguards.",
        ),
        (
            "Protected Health Information",
            "PHI includes any information that can be used to identify an individual and relates to their health status, provision of healthcare, or payment for healthcare services.",
        ),
        (
            "Patient Rights",
            "Patients have the right to access their health records, request corrections, and receive an accounting of disclosures. Healthcare providers must provide notice of privacy practices.",
        ),
        (
            "Security Measures",
            "HIPAA requires covered entities to implement administrative, physical, and technical safeguards to protect health information from unauthorized access, use, or disclosure.",
        ),
    ],
    word_count: 287,
    policy_type: PolicyType::Hipaa,
    jurisdiction: "US",
};

const GENERIC: Template = Template {
    title: "Website Privacy Policy",
    sections: &[
        (
            "Information Collection",
            "This website collects personal information including names, email addresses, and browsing data to provide personalized services and improve user experience. We collect information you provide directly to us and information collected automatically through cookies and similar technologies.",
        ),
        (
            "Information Use",
            "Your personal information is used to provide services, communicate with you, and improve our website functionality. We may use your information to personalize your experience, process transactions, and send you relevant updates.",
        ),
        (
            "Information Sharing",
            "We do not sell your personal information to third parties. We may share your information with trusted service providers who assist us in operating our website and providing services. We may also disclose information when required by law.",
        ),
        (
            "Data Security",
            "We implement appropriate security measures to protect your personal information against unauthorized access, alteration, disclosure, or destruction. These measures include encryption, secure servers, and regular security assessments.",
        ),
        (
            "Your Rights",
            "You have the right to access, correct, or delete your personal information. You may also opt out of certain data processing activities by contacting us. We will respond to your requests within the timeframe required by applicable law.",
        ),
        (
            "Cookies and Tracking",
            "We use cookies and similar technologies to enhance your browsing experience, analyze site traffic, and understand where our visitors are coming from. You can control cookie settings through your browser preferences.",
        ),
    ],
    word_count: 456,
    policy_type: PolicyType::General,
    jurisdiction: "Multiple",
};

fn template(category: Category) -> &'static Template {
    match category {
        Category::Gdpr => &GDPR,
        Category::Education => &EDUCATION,
        Category::Health => &HEALTH,
        Category::Generic => &GENERIC,
    }
}

/// Build a [`ScrapedDocument`] from the static template for `category`,
/// substituting the request URL and timestamp. Every call constructs a fresh
/// document; nothing is cached or mutated afterwards.
pub fn synthesize(category: Category, url: &str, scraped_at: DateTime<Utc>) -> ScrapedDocument {
    let template = template(category);

    let sections: Vec<Section> = template
        .sections
        .iter()
        .map(|&(title, content)| Section {
            title: title.to_string(),
            content: content.to_string(),
        })
        .collect();

    ScrapedDocument {
        url: url.to_string(),
        title: template.title.to_string(),
        metadata: Metadata {
            scraped_at,
            word_count: template.word_count,
            sections: sections.len() as u32,
            policy_type: template.policy_type,
            jurisdiction: template.jurisdiction.to_string(),
        },
        sections,
    }
}
