//! Static copy for every section of the page. Nothing here changes at runtime.

pub const BRAND: &str = "WebForge";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub rating: u8,
    pub text: &'static str,
    pub initials: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Emily Carter",
        role: "Founder of Blossom Beauty",
        company: "Blossom Beauty",
        rating: 5,
        text: "Working with this design team has been a game-changer for our brand. Their creative vision and attention to detail have elevated our online presence and brought our brand to life.",
        initials: "EC",
    },
    Testimonial {
        id: 2,
        name: "Sarah Thompson",
        role: "CEO of GreenLeaf",
        company: "GreenLeaf",
        rating: 5,
        text: "Working with this design team has been a game-changer for our brand. Their creative vision and attention to detail have elevated our online presence and brought our brand to life.",
        initials: "ST",
    },
    Testimonial {
        id: 3,
        name: "Alex Kim",
        role: "COO of TechFlow",
        company: "TechFlow",
        rating: 5,
        text: "The motion designs created by this team have brought our promotional videos to life. The animations are engaging and professional, capturing our brand perfectly.",
        initials: "AK",
    },
    Testimonial {
        id: 4,
        name: "Michael Lee",
        role: "Creative Director at Apex Advertising",
        company: "Apex Advertising",
        rating: 5,
        text: "The custom illustrations and graphics have added a unique flair to our marketing materials. We couldn't be happier with the results and the impact they've had on our campaigns.",
        initials: "ML",
    },
    Testimonial {
        id: 5,
        name: "David Reynolds",
        role: "Marketing Director at Tech Innovators",
        company: "Tech Innovators",
        rating: 5,
        text: "The logo and branding services we received were exceptional. The team took our ideas and transformed them into a cohesive and striking brand identity that has resonated with our audience.",
        initials: "DR",
    },
    Testimonial {
        id: 6,
        name: "Jonathan Perez",
        role: "Owner of Coastal Ventures",
        company: "Coastal Ventures",
        rating: 5,
        text: "The graphic design services provided have been outstanding. Every piece they create is visually striking and aligned perfectly with our brand's message. We've received numerous compliments from our customers.",
        initials: "JP",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "1000+", label: "Happy Clients", description: "Satisfied customers worldwide" },
    Stat { value: "500+", label: "Projects Completed", description: "Successful project deliveries" },
    Stat { value: "24/7", label: "Support Available", description: "Round-the-clock assistance" },
    Stat { value: "99%", label: "Client Satisfaction", description: "Proven track record" },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
    pub accent: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🔍",
        title: "Unlimited Request",
        description: "Make as many design requests as you need without any limits.",
        features: ["No Request Limits", "Queue Management", "Priority System", "24/7 Submission"],
        accent: "purple",
    },
    Service {
        icon: "🎨",
        title: "Unique Designs",
        description: "Stand out with custom, one-of-a-kind designs tailored specifically for your brand.",
        features: ["Custom Design", "Brand Aligned", "Original Work", "Multiple Concepts"],
        accent: "cyan",
    },
    Service {
        icon: "📱",
        title: "Fast Delivery",
        description: "Get your designs quickly and efficiently, ensuring your projects stay on track.",
        features: ["48hr Average", "Rush Options", "Quick Turnaround", "Efficient Workflow"],
        accent: "green",
    },
    Service {
        icon: "📦",
        title: "Conversion Friendly",
        description: "Our designs are optimized to drive engagement and boost conversions.",
        features: ["User Focused", "Performance Driven", "A/B Tested", "Analytics Ready"],
        accent: "orange",
    },
    Service {
        icon: "🎬",
        title: "Full Solution",
        description: "From concept to completion, we provide design solutions to cover all your needs.",
        features: ["End-to-End", "Complete Package", "All Formats", "Ready to Use"],
        accent: "violet",
    },
    Service {
        icon: "💻",
        title: "Full Satisfaction",
        description: "Your satisfaction is our top priority. We'll revise the designs until you're 100% satisfied.",
        features: ["Unlimited Revisions", "Money Back Guarantee", "Quality Assurance", "Client First"],
        accent: "amber",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    WebDesign,
    MobileApps,
    Branding,
    ECommerce,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::WebDesign => "Web Design",
            Category::MobileApps => "Mobile Apps",
            Category::Branding => "Branding",
            Category::ECommerce => "E-commerce",
        }
    }
}

/// Portfolio filter button. `None` shows everything.
pub const FILTERS: &[Option<Category>] = &[
    None,
    Some(Category::WebDesign),
    Some(Category::MobileApps),
    Some(Category::Branding),
    Some(Category::ECommerce),
];

pub fn filter_label(filter: Option<Category>) -> &'static str {
    filter.map(Category::label).unwrap_or("All")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub featured: bool,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Autogenesis Platform",
        category: Category::WebDesign,
        description: "Revolutionize your visuals. Enter the world of Autogenesis.",
        tags: &["React", "Next.js", "Tailwind"],
        featured: true,
    },
    Project {
        id: 2,
        title: "Blockchain Innovation",
        category: Category::WebDesign,
        description: "Ignite Your Blockchain Innovations with cutting-edge technology.",
        tags: &["Vue.js", "Web3", "DeFi"],
        featured: true,
    },
    Project {
        id: 3,
        title: "Corporate Dashboard",
        category: Category::WebDesign,
        description: "Innovate. Disrupt. Dominate. Modern corporate solutions.",
        tags: &["Dashboard", "Analytics", "SaaS"],
        featured: false,
    },
    Project {
        id: 4,
        title: "Mobile Banking App",
        category: Category::MobileApps,
        description: "Secure and intuitive mobile banking experience.",
        tags: &["React Native", "FinTech", "Security"],
        featured: true,
    },
    Project {
        id: 5,
        title: "E-commerce Platform",
        category: Category::ECommerce,
        description: "Complete online shopping solution with modern design.",
        tags: &["Shopify", "Payment", "Mobile"],
        featured: false,
    },
    Project {
        id: 6,
        title: "Brand Identity Design",
        category: Category::Branding,
        description: "Complete brand identity for a tech startup.",
        tags: &["Logo", "Guidelines", "Print"],
        featured: false,
    },
];

pub fn projects_in(filter: Option<Category>) -> impl Iterator<Item = &'static Project> {
    PROJECTS
        .iter()
        .filter(move |project| filter.map_or(true, |category| project.category == category))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
    pub cta: &'static str,
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Basic",
        price: "$1500",
        period: "Per month",
        description: "Perfect for small businesses and startups",
        features: &[
            "Unlimited requests",
            "One request at a time",
            "Average 48 hour delivery",
            "Unlimited revisions",
            "Framer development",
            "Unlimited meetings",
            "Slack channel",
            "Cancel anytime",
        ],
        popular: false,
        cta: "Get Started",
    },
    Plan {
        name: "Pro",
        price: "$3600",
        period: "Per month",
        description: "Most popular plan for growing businesses",
        features: &[
            "Unlimited requests",
            "One request at a time",
            "Average 48 hour delivery",
            "Unlimited revisions",
            "Framer development",
            "Weekly meetings",
            "Slack Channel",
            "Cancel anytime",
        ],
        popular: true,
        cta: "Get Started",
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        period: "Per month",
        description: "For large teams and complex projects",
        features: &[
            "Unlimited requests",
            "Multiple request at a time",
            "Same day delivery",
            "Dedicated account manager",
            "Dedicated designer",
            "Regular meetings",
            "Business Consulting",
            "Cancel anytime",
        ],
        popular: false,
        cta: "Book a call",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Why wouldn't I hire a full-time designer?",
        answer: "Hiring a full-time senior designer can cost over $100,000 annually, plus benefits. With our service, you get access to top-tier design talent for a fraction of the cost, with the flexibility to pause or cancel anytime.",
    },
    Faq {
        question: "What is included in each subscription plan?",
        answer: "Each plan includes unlimited design requests, revisions, and access to our design team. Higher tiers offer faster delivery, dedicated account management, and additional services like development and consulting.",
    },
    Faq {
        question: "Can I switch plans later?",
        answer: "Absolutely! You can upgrade or downgrade your plan at any time. Changes take effect at the start of your next billing cycle. We'll work with you to ensure a smooth transition.",
    },
    Faq {
        question: "How does the revision process work?",
        answer: "We offer unlimited revisions on all our plans. Simply provide feedback, and we'll refine the design until you're 100% satisfied. Most revisions are completed within 24-48 hours.",
    },
    Faq {
        question: "What is the typical turnaround time for projects?",
        answer: "Most design requests are completed within 48 hours for Basic and Pro plans. Enterprise clients enjoy same-day delivery for urgent requests. Complex projects may take longer, but we'll always communicate timelines upfront.",
    },
    Faq {
        question: "Do you offer custom design services outside of the subscription plans?",
        answer: "Yes! We offer custom project pricing for unique requirements or one-time projects. Contact us to discuss your specific needs, and we'll create a tailored proposal for you.",
    },
    Faq {
        question: "How do I get started?",
        answer: "Simply choose your plan and sign up. You'll immediately get access to our project dashboard where you can submit your first design request. We'll also schedule an onboarding call to understand your brand and goals.",
    },
    Faq {
        question: "What payment methods do you accept?",
        answer: "We accept all major credit cards (Visa, MasterCard, American Express) and PayPal. Enterprise clients can also pay via bank transfer or invoice with NET 30 terms.",
    },
];

pub const TRUSTED_BY: &[&str] = &["ProjectX", "InnovateWeb", "DevHub", "CodeMasters"];

/// (label, href)
pub type Link = (&'static str, &'static str);

pub const FOOTER_COLUMNS: &[(&str, &[Link])] = &[
    (
        "Services",
        &[("Websites", "#services"), ("Web Apps", "#services"), ("E-commerce", "#services"), ("Custom Dev", "#services")],
    ),
    (
        "Company",
        &[("About Us", "#about"), ("Our Work", "#portfolio"), ("Careers", "#"), ("Contact", "#contact")],
    ),
    (
        "Resources",
        &[("Blog", "#"), ("Case Studies", "#"), ("FAQ", "#faq"), ("Support", "#")],
    ),
];

pub const LEGAL_LINKS: &[Link] = &[
    ("Privacy Policy", "#"),
    ("Terms of Service", "#"),
    ("Cookie Policy", "#"),
    ("Disclaimer", "#"),
];

pub const SOCIAL_LINKS: &[Link] = &[
    ("Twitter", "#"),
    ("Facebook", "#"),
    ("Instagram", "#"),
    ("LinkedIn", "#"),
    ("GitHub", "#"),
];

pub const NAV_LINKS: &[Link] = &[
    ("About", "#about"),
    ("Services", "#services"),
    ("Work", "#portfolio"),
    ("Pricing", "#pricing"),
    ("FAQ", "#faq"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_shows_every_project() {
        assert_eq!(projects_in(None).count(), PROJECTS.len());
    }

    #[test]
    fn category_filter_keeps_order_and_matches_only() {
        let ids: Vec<u32> = projects_in(Some(Category::WebDesign)).map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(projects_in(Some(Category::Branding)).count(), 1);
    }

    #[test]
    fn every_filter_has_a_label() {
        let labels: Vec<&str> = FILTERS.iter().map(|f| filter_label(*f)).collect();
        assert_eq!(labels, vec!["All", "Web Design", "Mobile Apps", "Branding", "E-commerce"]);
    }

    #[test]
    fn testimonials_are_well_formed() {
        assert!(!TESTIMONIALS.is_empty());
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn exactly_one_popular_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
    }
}
