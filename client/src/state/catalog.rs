//! Static project catalog.
//!
//! Records are authored here and never mutated at runtime. Which modal
//! layout a record uses is part of the data (`ProjectLayout`), not derived
//! from its title.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardMetric {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoadmapPhase {
    pub phase: &'static str,
    pub status: PhaseStatus,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseStatus {
    Done,
    InProgress,
    Planned,
}

impl PhaseStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Done => "Done",
            Self::InProgress => "In progress",
            Self::Planned => "Planned",
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Done => "roadmap-phase--done",
            Self::InProgress => "roadmap-phase--active",
            Self::Planned => "roadmap-phase--planned",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArchitectureLayer {
    pub layer: &'static str,
    pub detail: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// Extra sections rendered by the tabbed modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtendedDetail {
    pub features: &'static [&'static str],
    pub roadmap: &'static [RoadmapPhase],
    pub architecture: &'static [ArchitectureLayer],
    pub metrics: &'static [CardMetric],
    pub links: &'static [ProjectLink],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectLayout {
    Standard,
    Extended(&'static ExtendedDetail),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub title: &'static str,
    /// Filter tag matched against the active filter.
    pub category: &'static str,
    pub category_label: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub results: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub card_metrics: &'static [CardMetric],
    pub layout: ProjectLayout,
}

impl ProjectRecord {
    #[must_use]
    pub fn extended(&self) -> Option<&'static ExtendedDetail> {
        match self.layout {
            ProjectLayout::Standard => None,
            ProjectLayout::Extended(detail) => Some(detail),
        }
    }
}

const INNOVATELAB_DETAIL: ExtendedDetail = ExtendedDetail {
    features: &[
        "Waitlist with referral tracking and position updates",
        "Interactive product preview built from design prototypes",
        "Email drip campaign triggered on sign-up",
        "Investor page with live pre-registration counter",
    ],
    roadmap: &[
        RoadmapPhase {
            phase: "Pre-launch",
            status: PhaseStatus::Done,
            items: &["Coming-soon page", "Referral program", "500+ early sign-ups"],
        },
        RoadmapPhase {
            phase: "Private beta",
            status: PhaseStatus::InProgress,
            items: &["Invite waves from the waitlist", "In-app feedback widget"],
        },
        RoadmapPhase {
            phase: "Public launch",
            status: PhaseStatus::Planned,
            items: &["Pricing page", "Self-serve onboarding", "Case studies"],
        },
    ],
    architecture: &[
        ArchitectureLayer { layer: "Frontend", detail: "Next.js static export with styled components" },
        ArchitectureLayer { layer: "Forms", detail: "Netlify Forms with EmailJS notifications" },
        ArchitectureLayer { layer: "Referrals", detail: "Serverless function issuing signed referral codes" },
        ArchitectureLayer { layer: "Hosting", detail: "Netlify CDN with branch previews" },
    ],
    metrics: &[
        CardMetric { value: "500+", label: "Pre-registrations" },
        CardMetric { value: "42%", label: "Primary CTA click-through" },
        CardMetric { value: "25%", label: "Referral rate" },
        CardMetric { value: "$50K+", label: "Funding raised" },
    ],
    links: &[
        ProjectLink { label: "Live preview", url: "#" },
        ProjectLink { label: "Design prototype", url: "#" },
    ],
};

pub static CATALOG: &[ProjectRecord] = &[
    ProjectRecord {
        id: "techstore",
        title: "TechStore - E-commerce Landing",
        category: "ecommerce",
        category_label: "E-commerce",
        image: "/assets/project-1.jpg",
        description: "Landing page for a technology store that lifted conversions by 45%. \
                      Built around featured products with strategic calls to action.",
        challenge: "The client had a very high bounce rate (78%) and low conversions. \
                    Visitors did not understand the value proposition.",
        solution: "A clean layout with a clear visual hierarchy, prominent testimonials, \
                   and a simplified checkout flow.",
        results: &[
            "+45% conversions",
            "-60% bounce rate",
            "+120% time on page",
            "+85% primary CTA click-through",
        ],
        technologies: &["HTML5", "CSS3", "JavaScript", "Shopify", "Google Analytics"],
        card_metrics: &[
            CardMetric { value: "+45%", label: "Conversions" },
            CardMetric { value: "-60%", label: "Bounce rate" },
        ],
        layout: ProjectLayout::Standard,
    },
    ProjectRecord {
        id: "cloudsync",
        title: "CloudSync - SaaS Platform",
        category: "saas",
        category_label: "SaaS",
        image: "/assets/project-2.jpg",
        description: "Sign-up page for a cloud sync platform. Sign-ups grew 80% with a \
                      benefit-driven design.",
        challenge: "The previous page was highly technical and did not communicate the \
                    product's benefits.",
        solution: "A visual narrative moving from problem to solution to benefits, with an \
                   interactive demo.",
        results: &[
            "+80% sign-ups",
            "35% primary button click-through",
            "+65% form completion",
            "4.2/5 satisfaction score",
        ],
        technologies: &["React", "TypeScript", "Tailwind CSS", "Framer Motion", "Vercel"],
        card_metrics: &[
            CardMetric { value: "+80%", label: "Sign-ups" },
            CardMetric { value: "35%", label: "CTR" },
        ],
        layout: ProjectLayout::Standard,
    },
    ProjectRecord {
        id: "consultpro",
        title: "ConsultPro - Professional Services",
        category: "services",
        category_label: "Services",
        image: "/assets/project-3.jpg",
        description: "Landing page for a consultancy that tripled lead generation, focused \
                      on credibility and success stories.",
        challenge: "Visitors did not trust the service and the previous page converted \
                    poorly.",
        solution: "A professional design with verified testimonials, detailed case studies, \
                   and an optimized contact form.",
        results: &[
            "+120% lead generation",
            "28% conversion rate",
            "+200% qualified inquiries",
            "92% client satisfaction",
        ],
        technologies: &["WordPress", "Custom CSS", "PHP", "HubSpot", "Google Optimize"],
        card_metrics: &[
            CardMetric { value: "+120%", label: "Leads" },
            CardMetric { value: "28%", label: "Conversion" },
        ],
        layout: ProjectLayout::Standard,
    },
    ProjectRecord {
        id: "innovatelab",
        title: "InnovateLab - Startup Launch",
        category: "startup",
        category_label: "Startup",
        image: "/assets/project-4.jpg",
        description: "Pre-launch landing page that collected more than 500 early \
                      registrations. Communicates innovation and builds anticipation.",
        challenge: "A startup without a finished product needed to generate interest and \
                    capture early adopters.",
        solution: "A coming-soon page with strong storytelling, a product preview, and a \
                   referral system.",
        results: &[
            "500+ pre-registrations",
            "42% primary CTA click-through",
            "25% referral rate",
            "$50K+ funding raised",
        ],
        technologies: &["Next.js", "Styled Components", "EmailJS", "Netlify", "Figma"],
        card_metrics: &[
            CardMetric { value: "500+", label: "Sign-ups" },
            CardMetric { value: "42%", label: "CTR" },
        ],
        layout: ProjectLayout::Extended(&INNOVATELAB_DETAIL),
    },
];

/// Look up a record by identifier.
#[must_use]
pub fn find(id: &str) -> Option<&'static ProjectRecord> {
    CATALOG.iter().find(|record| record.id == id)
}

/// Distinct `(tag, label)` pairs in catalog order.
#[must_use]
pub fn categories() -> Vec<(&'static str, &'static str)> {
    let mut seen = Vec::new();
    for record in CATALOG {
        if !seen.iter().any(|(tag, _)| *tag == record.category) {
            seen.push((record.category, record.category_label));
        }
    }
    seen
}
