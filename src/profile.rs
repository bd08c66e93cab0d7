//! Static content for the hero section.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
}

impl SocialKind {
    pub fn label(self) -> &'static str {
        match self {
            SocialKind::GitHub => "GitHub Profile",
            SocialKind::LinkedIn => "LinkedIn Profile",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            SocialKind::GitHub => "devicon-github-plain",
            SocialKind::LinkedIn => "devicon-linkedin-plain",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteProfile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub description: &'static str,
    pub socials: &'static [SocialLink],
    pub stats: &'static [Stat],
}

impl SiteProfile {
    /// Display name for page titles, e.g. "Sajda Sabnam".
    pub fn full_name(&self) -> String {
        [self.first_name, self.last_name].map(title_case).join(" ")
    }

    /// Number of hero elements that slide up and fade on scroll: title,
    /// description, social links and one per stat.
    pub fn animated_elements(&self) -> usize {
        3 + self.stats.len()
    }
}

fn title_case(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub const PROFILE: SiteProfile = SiteProfile {
    first_name: "SAJDA",
    last_name: "SABNAM",
    description: "Detail-oriented Developer with hands-on experience in building full-stack web applications using MongoDB, Express.js, React.js, and Node.js. Skilled in creating modern, responsive user interfaces, developing RESTful APIs, and writing clean, efficient, and scalable code. Passionate about continuous learning, problem-solving, and building impactful web solutions.",
    socials: &[
        SocialLink {
            kind: SocialKind::GitHub,
            href: "https://github.com/sajda25",
        },
        SocialLink {
            kind: SocialKind::LinkedIn,
            href: "https://www.linkedin.com/in/sajda-sabnam-486614265/",
        },
    ],
    stats: &[
        Stat {
            value: "6+",
            label: "Projects Built",
        },
        Stat {
            value: "10K+",
            label: "Hours Worked",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(PROFILE.full_name(), "Sajda Sabnam");
    }

    #[test]
    fn test_animated_elements() {
        assert_eq!(PROFILE.animated_elements(), 5);
    }
}
