pub const INTEREST_SUGGESTIONS: &[&str] = &[
    "Web Development",
    "Mobile App Development",
    "Data Science",
    "Machine Learning",
    "Artificial Intelligence",
    "Cybersecurity",
    "Cloud Computing",
    "DevOps",
    "UI/UX Design",
    "Graphic Design",
    "Digital Marketing",
    "Content Creation",
    "Social Media Marketing",
    "SEO/SEM",
    "E-commerce",
    "Project Management",
    "Business Analysis",
    "Financial Analysis",
    "Sales",
    "Customer Service",
    "Human Resources",
    "Healthcare",
    "Education",
    "Research",
    "Writing & Editing",
];

/// Skills offered once an interest is picked. Interests without an entry offer none.
const SKILLS_BY_INTEREST: &[(&str, &[&str])] = &[
    (
        "Web Development",
        &[
            "JavaScript",
            "React",
            "Node.js",
            "HTML/CSS",
            "TypeScript",
            "Vue.js",
            "Angular",
            "Python",
            "PHP",
        ],
    ),
    (
        "Mobile App Development",
        &[
            "React Native",
            "Flutter",
            "Swift",
            "Kotlin",
            "Java",
            "Xamarin",
            "Ionic",
        ],
    ),
    (
        "Data Science",
        &[
            "Python",
            "R",
            "SQL",
            "Pandas",
            "NumPy",
            "Matplotlib",
            "Tableau",
            "Power BI",
            "Excel",
        ],
    ),
    (
        "Machine Learning",
        &[
            "Python",
            "TensorFlow",
            "PyTorch",
            "Scikit-learn",
            "Keras",
            "OpenCV",
            "NLTK",
        ],
    ),
    (
        "UI/UX Design",
        &[
            "Figma",
            "Sketch",
            "Adobe XD",
            "Photoshop",
            "Illustrator",
            "InVision",
            "Principle",
        ],
    ),
    (
        "Digital Marketing",
        &[
            "Google Analytics",
            "Google Ads",
            "Facebook Ads",
            "SEO",
            "Content Marketing",
            "Email Marketing",
        ],
    ),
    (
        "Project Management",
        &[
            "Agile",
            "Scrum",
            "Jira",
            "Trello",
            "Asana",
            "MS Project",
            "Slack",
        ],
    ),
    (
        "Cybersecurity",
        &[
            "Network Security",
            "Penetration Testing",
            "Risk Assessment",
            "Compliance",
            "Incident Response",
        ],
    ),
    (
        "Cloud Computing",
        &[
            "AWS",
            "Azure",
            "Google Cloud",
            "Docker",
            "Kubernetes",
            "Terraform",
        ],
    ),
    (
        "DevOps",
        &[
            "Docker",
            "Kubernetes",
            "Jenkins",
            "Git",
            "CI/CD",
            "Linux",
            "Bash",
        ],
    ),
];

pub fn skills_for_interest(interest: &str) -> &'static [&'static str] {
    SKILLS_BY_INTEREST
        .iter()
        .find(|(name, _)| *name == interest)
        .map(|(_, skills)| *skills)
        .unwrap_or(&[])
}

/// Union of the suggested skills for every selected interest, first occurrence wins.
pub fn suggested_skills<S: AsRef<str>>(interests: &[S]) -> Vec<&'static str> {
    let mut skills: Vec<&'static str> = Vec::new();
    for interest in interests {
        for skill in skills_for_interest(interest.as_ref()) {
            if !skills.contains(skill) {
                skills.push(skill);
            }
        }
    }
    skills
}
