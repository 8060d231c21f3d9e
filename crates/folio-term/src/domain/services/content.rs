//! Canonical text shown by the terminal.

pub const GREETING: &[&str] = &[
    "Welcome to Saurabh's Portfolio Terminal v2.0.1",
    "Type \"help\" for available commands",
    "",
];

pub const CLEARED: &[&str] = &["Terminal cleared.", ""];

pub const HELP_HEADER: &str = "Available commands:";
pub const HELP_FOOTER: &[&str] = &["", "Type any command to continue...", ""];

pub const NOT_FOUND_HINT: &str = "Type \"help\" for available commands";

pub fn not_found(raw: &str) -> String {
    format!("Command not found: {raw}")
}

pub const ABOUT: &[&str] = &[
    "Saurabh Wankhede - Full-Stack Developer",
    "================================",
    "Computer Engineering student with passion for creating",
    "innovative web and mobile applications. Currently exploring",
    "the intersection of technology and rural development.",
    "",
    "Location: Tirora, Maharashtra, India",
    "CGPA: 7.23/10",
    "Interests: Web Development, Mobile Apps, UI/UX Design",
    "",
];

pub const PROJECTS: &[&str] = &[
    "Active Projects in the Galaxy:",
    "==============================",
    "🪐 UBA College Website - Rural development showcase",
    "🪐 Vector-Lab Website - Corporate IT solutions",
    "⭐ Gram Arogya Seva App - Telemedicine platform",
    "☄️ Infinity Event Website - Technical event portal",
    "☄️ Insight Event Website - Cultural event platform",
    "",
    "Use \"project <name>\" for detailed information",
    "",
];

pub const SKILLS: &[&str] = &[
    "Technical Constellation:",
    "========================",
    "Languages: Python ⭐⭐⭐⭐⭐ | JavaScript ⭐⭐⭐⭐",
    "Frontend: React.js, HTML/CSS, Tailwind CSS",
    "Backend: Node.js, PHP, Firebase",
    "Mobile: Flutter, Dart",
    "Database: MySQL, PostgreSQL, MongoDB, Firebase",
    "Tools: Git, Android Studio, XAMPP, Photoshop",
    "",
];

pub const EXPERIENCE: &[&str] = &[
    "Professional Journey:",
    "=====================",
    "🚀 VectorLab - Web Development Intern (Apr 2025 - Aug 2025)",
    "   • Built responsive interfaces using Remix and React.js",
    "   • Collaborated with teams on frontend optimization",
    "   • Participated in client requirement gathering",
    "",
    "🌟 Unnat Bharat Abhiyan - Developer (Oct 2024 - May 2025)",
    "   • Developed UBA SVPCET Website",
    "   • Created Virtual Doctor Mobile Application",
    "   • Contributed to rural development initiatives",
    "",
    "💻 Code Clause - Virtual Intern (Nov 2024 - Dec 2024)",
    "   • Developed e-commerce website using HTML, CSS, JS",
    "",
];

pub const EDUCATION: &[&str] = &[
    "Academic Trajectory:",
    "===================",
    "🎓 B.Tech Computer Engineering (2022-Present)",
    "   St. Vincent Pallotti College of Engineering",
    "   CGPA: 7.23/10",
    "",
    "📚 Higher Secondary Certificate (2020-2021)",
    "   Chhota Bhai Jawahar Bhai Patel College",
    "   Percentage: 80%",
    "",
    "📖 Secondary School Certificate (2018-2019)",
    "   Shahid Mishra High School",
    "   Percentage: 69%",
    "",
];

pub const CERTIFICATIONS: &[&str] = &[
    "Professional Certifications:",
    "============================",
    "📜 Google Analytics Certification",
    "📜 Data Analytics With Python",
    "📜 Certified Graphic Designer",
    "",
];

pub const LEADERSHIP: &[&str] = &[
    "Leadership & Community Involvement:",
    "===================================",
    "🌟 ACM-SVPCE WEB COORDINATOR 2024-25",
    "🌟 Unnat Bharat Abhiyan SVPCE Developer Team Coordinator 2024-25",
    "🌟 Infinity Media Head - 2024",
    "🌟 Insight Development Head 2024",
    "",
];

pub const CONTACT: &[&str] = &[
    "Establish Communication:",
    "========================",
    "📧 Email: Swankhede228@gmail.com",
    "📱 Phone: +91 8788062498",
    "🌍 Location: Pujaritola, Tirora, Gondia, Maharashtra",
    "💼 LinkedIn: https://www.linkedin.com/in/saurabh-wankhede-025359202/",
    "🐙 GitHub: https://github.com/Mrsam2",
    "📸 Instagram: https://www.instagram.com/xdp_sam",
    "",
    "Always open to new opportunities and collaborations!",
    "",
];
