use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Link {
    GitHub,
    LinkedIn,
    Instagram,
    Email,
}

impl Link {
    pub fn url(&self) -> &'static str {
        match self {
            Link::GitHub => "https://github.com/Mrsam2",
            Link::LinkedIn => "https://www.linkedin.com/in/saurabh-wankhede-025359202/",
            Link::Instagram => "https://www.instagram.com/xdp_sam?igsh=b3VyeGxlZ2p6OWY0",
            Link::Email => "mailto:Swankhede228@gmail.com",
        }
    }

    pub fn confirmation(&self) -> &'static str {
        match self {
            Link::GitHub => "Opening GitHub profile... 🐙",
            Link::LinkedIn => "Opening LinkedIn profile... 💼",
            Link::Instagram => "Opening Instagram profile... 📸",
            Link::Email => "Opening email client... 📧",
        }
    }
}
