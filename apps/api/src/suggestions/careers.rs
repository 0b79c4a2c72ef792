use serde::Serialize;

/// A fixed career path entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSuggestion {
    pub title: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub steps: &'static [&'static str],
    pub growth_outlook: &'static str,
}

pub const TECHNOLOGY: &[CareerSuggestion] = &[
    CareerSuggestion {
        title: "Software Developer",
        description: "Design, develop, and maintain software applications and systems.",
        skills: &[
            "JavaScript",
            "Python",
            "Problem Solving",
            "Git",
            "Agile Methodologies",
        ],
        steps: &[
            "Learn programming fundamentals and choose a language to specialize in",
            "Build a portfolio of personal projects",
            "Contribute to open source projects",
            "Apply for entry-level positions or internships",
            "Continue learning through online courses and certifications",
        ],
        growth_outlook: "22% growth expected over the next decade",
    },
    CareerSuggestion {
        title: "Data Scientist",
        description: "Analyze and interpret complex data to help organizations make better decisions.",
        skills: &[
            "Python",
            "R",
            "SQL",
            "Statistics",
            "Machine Learning",
            "Data Visualization",
        ],
        steps: &[
            "Develop strong foundation in mathematics and statistics",
            "Learn programming languages like Python or R",
            "Practice with real datasets and Kaggle competitions",
            "Build a portfolio showcasing your data analysis projects",
            "Pursue relevant certifications or advanced degree",
        ],
        growth_outlook: "36% growth expected over the next decade",
    },
    CareerSuggestion {
        title: "UX/UI Designer",
        description: "Create intuitive, engaging user experiences for websites and applications.",
        skills: &[
            "User Research",
            "Wireframing",
            "Prototyping",
            "Visual Design",
            "Figma/Sketch",
        ],
        steps: &[
            "Study design principles and user psychology",
            "Learn industry-standard design tools",
            "Create a portfolio showcasing your design process",
            "Seek internships or junior positions",
            "Stay updated with latest design trends and user research methods",
        ],
        growth_outlook: "13% growth expected over the next decade",
    },
];

pub const BUSINESS: &[CareerSuggestion] = &[
    CareerSuggestion {
        title: "Digital Marketing Specialist",
        description: "Plan and execute marketing campaigns across digital channels.",
        skills: &[
            "SEO",
            "Social Media Marketing",
            "Content Creation",
            "Analytics",
            "Email Marketing",
        ],
        steps: &[
            "Learn digital marketing fundamentals through courses",
            "Get Google Analytics and other relevant certifications",
            "Create sample campaigns for personal or volunteer projects",
            "Build a portfolio showcasing your marketing strategies",
            "Apply for entry-level positions or internships",
        ],
        growth_outlook: "10% growth expected over the next decade",
    },
    CareerSuggestion {
        title: "Project Manager",
        description: "Plan, execute, and close projects while ensuring they're delivered on time and within budget.",
        skills: &[
            "Leadership",
            "Organization",
            "Communication",
            "Risk Management",
            "Budgeting",
        ],
        steps: &[
            "Develop strong organizational and communication skills",
            "Learn project management methodologies (Agile, Scrum, etc.)",
            "Pursue certifications like PMP or PRINCE2",
            "Gain experience leading small projects",
            "Apply for assistant or junior project manager roles",
        ],
        growth_outlook: "8% growth expected over the next decade",
    },
];

pub const CREATIVE: &[CareerSuggestion] = &[
    CareerSuggestion {
        title: "Content Creator",
        description: "Produce engaging content for various platforms including blogs, social media, and video.",
        skills: &[
            "Writing",
            "Video Production",
            "Social Media",
            "SEO",
            "Audience Engagement",
        ],
        steps: &[
            "Develop your writing, video, or audio production skills",
            "Create a personal brand and build an online presence",
            "Start creating content consistently on relevant platforms",
            "Build a portfolio showcasing your best work",
            "Network with others in your niche",
        ],
        growth_outlook: "9% growth expected over the next decade",
    },
    CareerSuggestion {
        title: "Graphic Designer",
        description: "Create visual concepts to communicate ideas that inspire and inform consumers.",
        skills: &[
            "Adobe Creative Suite",
            "Typography",
            "Color Theory",
            "Layout Design",
            "Branding",
        ],
        steps: &[
            "Learn design principles and software tools",
            "Build a portfolio showcasing various design styles",
            "Take on freelance projects or volunteer work",
            "Network with other designers and potential clients",
            "Apply for junior designer positions",
        ],
        growth_outlook: "3% growth expected over the next decade",
    },
];
