//! Demo data inserted at startup.

use super::Storage;
use crate::auth::hash_password;
use crate::models::{
    NewArticle, NewCourse, NewEnrollment, NewInstructor, NewTestimonial, NewUser, Role,
};

/// Email of the seeded demo student
pub const DEMO_EMAIL: &str = "demo@example.com";
/// Plain-text password of the seeded demo student
pub const DEMO_PASSWORD: &str = "password123";

/// Counts of what was inserted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub instructors: usize,
    pub courses: usize,
    pub testimonials: usize,
    pub articles: usize,
    pub users: usize,
    pub enrollments: usize,
}

struct CourseSeed {
    title: &'static str,
    description: &'static str,
    category: &'static str,
    price_usd: &'static str,
    price_zwl: &'static str,
    duration: &'static str,
    level: &'static str,
    syllabus: &'static str,
    learning_outcomes: &'static str,
    /// Index into the seeded instructors
    instructor: usize,
    featured: bool,
}

const INSTRUCTORS: &[(&str, &str, &str, &str)] = &[
    (
        "Dr. Sarah Moyo",
        "Digital Marketing Expert",
        "With over 15 years of experience in digital marketing and advertising, Dr. Moyo has helped over 200 Zimbabwean businesses grow their online presence. She holds a PhD in Digital Communications and has worked with major international brands.",
        "Digital Marketing, SEO, Social Media Strategy",
    ),
    (
        "Michael Chikwanha",
        "Senior Software Engineer",
        "Michael is a full-stack developer with 10+ years of experience at top tech companies including Google and Microsoft. He's passionate about making coding accessible to African developers and has mentored over 500 students.",
        "Web Development, JavaScript, Python, AI",
    ),
];

const COURSES: &[CourseSeed] = &[
    CourseSeed {
        title: "Digital Marketing Basics",
        description: "Master the fundamentals of digital marketing including social media, email marketing, and content strategy. Perfect for beginners looking to grow their business online.",
        category: "Digital Marketing",
        price_usd: "49.00",
        price_zwl: "16000.00",
        duration: "6 weeks",
        level: "Beginner",
        syllabus: "Week 1: Introduction to Digital Marketing\nWeek 2: Social Media Marketing Fundamentals\nWeek 3: Content Marketing Strategy\nWeek 4: Email Marketing Essentials\nWeek 5: Analytics and Measurement\nWeek 6: Campaign Planning and Execution",
        learning_outcomes: "Create effective social media campaigns\nBuild an email marketing strategy\nUnderstand digital marketing analytics\nDevelop a content marketing plan\nMeasure and optimize campaign performance",
        instructor: 0,
        featured: true,
    },
    CourseSeed {
        title: "Facebook & Google Ads Mastery",
        description: "Learn to create high-converting Facebook and Google ad campaigns that drive real results. Master targeting, bidding strategies, and optimization techniques.",
        category: "Digital Marketing",
        price_usd: "79.00",
        price_zwl: "25800.00",
        duration: "8 weeks",
        level: "Intermediate",
        syllabus: "Week 1: Facebook Ads Manager Setup\nWeek 2: Audience Targeting and Segmentation\nWeek 3: Ad Creative Best Practices\nWeek 4: Campaign Optimization\nWeek 5: Google Ads Fundamentals\nWeek 6: Search vs Display Advertising\nWeek 7: Conversion Tracking\nWeek 8: Advanced Strategies and Scaling",
        learning_outcomes: "Set up and manage Facebook ad campaigns\nCreate compelling ad copy and visuals\nMaster audience targeting\nOptimize campaigns for conversions\nTrack and measure ROI\nScale profitable campaigns",
        instructor: 0,
        featured: true,
    },
    CourseSeed {
        title: "SEO Mastery",
        description: "Dominate search engine rankings with comprehensive SEO training. Learn on-page, off-page, and technical SEO strategies that work in 2026.",
        category: "SEO",
        price_usd: "99.00",
        price_zwl: "32400.00",
        duration: "10 weeks",
        level: "Intermediate",
        syllabus: "Week 1: SEO Fundamentals\nWeek 2: Keyword Research Mastery\nWeek 3: On-Page Optimization\nWeek 4: Technical SEO\nWeek 5: Link Building Strategies\nWeek 6: Content SEO\nWeek 7: Local SEO\nWeek 8: SEO Tools and Analytics\nWeek 9: Algorithm Updates\nWeek 10: Advanced SEO Strategies",
        learning_outcomes: "Conduct effective keyword research\nOptimize website content for search engines\nBuild high-quality backlinks\nImprove website technical performance\nRank higher in search results\nTrack and measure SEO success",
        instructor: 0,
        featured: false,
    },
    CourseSeed {
        title: "Content Monetization",
        description: "Turn your content into income streams. Learn affiliate marketing, sponsored content, digital products, and more ways to monetize your online presence.",
        category: "Digital Marketing",
        price_usd: "59.00",
        price_zwl: "19300.00",
        duration: "6 weeks",
        level: "Beginner",
        syllabus: "Week 1: Monetization Fundamentals\nWeek 2: Affiliate Marketing\nWeek 3: Sponsored Content\nWeek 4: Digital Product Creation\nWeek 5: Membership and Subscriptions\nWeek 6: Scaling Your Income",
        learning_outcomes: "Set up affiliate marketing programs\nNegotiate sponsored content deals\nCreate and sell digital products\nBuild membership sites\nDiversify income streams",
        instructor: 0,
        featured: false,
    },
    CourseSeed {
        title: "No-Code Development",
        description: "Build professional websites and apps without writing code. Master tools like Webflow, Bubble, and Airtable to bring your ideas to life.",
        category: "Coding",
        price_usd: "89.00",
        price_zwl: "29100.00",
        duration: "8 weeks",
        level: "Beginner",
        syllabus: "Week 1: No-Code Revolution\nWeek 2: Website Building with Webflow\nWeek 3: App Development with Bubble\nWeek 4: Database Design with Airtable\nWeek 5: Automation with Zapier\nWeek 6: E-commerce Setup\nWeek 7: User Authentication\nWeek 8: Launching Your Project",
        learning_outcomes: "Build responsive websites without code\nCreate functional web applications\nSet up automated workflows\nDesign databases\nLaunch complete projects",
        instructor: 1,
        featured: true,
    },
    CourseSeed {
        title: "AI for Business",
        description: "Leverage artificial intelligence to transform your business. Learn ChatGPT, automation, and AI tools that boost productivity and profits.",
        category: "AI",
        price_usd: "79.00",
        price_zwl: "25800.00",
        duration: "7 weeks",
        level: "Beginner",
        syllabus: "Week 1: AI Fundamentals for Business\nWeek 2: ChatGPT Mastery\nWeek 3: AI Content Creation\nWeek 4: AI Marketing Tools\nWeek 5: Automation with AI\nWeek 6: AI Analytics\nWeek 7: Implementing AI Strategy",
        learning_outcomes: "Use ChatGPT effectively for business\nAutomate repetitive tasks with AI\nCreate content faster with AI tools\nMake data-driven decisions\nDevelop an AI implementation strategy",
        instructor: 1,
        featured: true,
    },
    CourseSeed {
        title: "Web Development Essentials",
        description: "Start your coding journey with HTML, CSS, and JavaScript. Build real websites and learn the foundations of professional web development.",
        category: "Coding",
        price_usd: "129.00",
        price_zwl: "42200.00",
        duration: "12 weeks",
        level: "Beginner",
        syllabus: "Week 1-2: HTML Fundamentals\nWeek 3-4: CSS Styling and Layout\nWeek 5-6: Responsive Design\nWeek 7-9: JavaScript Basics\nWeek 10: DOM Manipulation\nWeek 11: APIs and Fetch\nWeek 12: Final Project",
        learning_outcomes: "Write clean HTML and CSS\nCreate responsive layouts\nUnderstand JavaScript fundamentals\nManipulate the DOM\nFetch data from APIs\nBuild complete websites",
        instructor: 1,
        featured: true,
    },
    CourseSeed {
        title: "Freelancing & Remote Work",
        description: "Build a successful freelance career. Learn how to find clients, set rates, manage projects, and work remotely for international companies.",
        category: "Freelancing",
        price_usd: "39.00",
        price_zwl: "12700.00",
        duration: "4 weeks",
        level: "Beginner",
        syllabus: "Week 1: Freelancing Fundamentals\nWeek 2: Finding and Landing Clients\nWeek 3: Pricing and Proposals\nWeek 4: Managing Projects and Scaling",
        learning_outcomes: "Create a winning portfolio\nFind high-paying clients\nWrite persuasive proposals\nSet profitable rates\nManage client relationships\nScale your freelance business",
        instructor: 0,
        featured: false,
    },
    CourseSeed {
        title: "E-commerce Mastery",
        description: "Launch and grow a profitable online store. Learn product selection, store setup, marketing, and fulfillment strategies.",
        category: "E-commerce",
        price_usd: "89.00",
        price_zwl: "29100.00",
        duration: "8 weeks",
        level: "Intermediate",
        syllabus: "Week 1: E-commerce Fundamentals\nWeek 2: Product Research and Selection\nWeek 3: Store Setup (Shopify)\nWeek 4: Product Photography and Listings\nWeek 5: Marketing Your Store\nWeek 6: Customer Service\nWeek 7: Fulfillment and Logistics\nWeek 8: Scaling Your Business",
        learning_outcomes: "Find profitable products to sell\nSet up a professional online store\nCreate compelling product listings\nDrive traffic to your store\nManage orders and fulfillment\nScale to 6-figure revenue",
        instructor: 0,
        featured: false,
    },
    CourseSeed {
        title: "WhatsApp Business Automation",
        description: "Automate your WhatsApp business communication. Learn chatbots, broadcast messaging, and customer management strategies.",
        category: "Digital Marketing",
        price_usd: "69.00",
        price_zwl: "22600.00",
        duration: "5 weeks",
        level: "Intermediate",
        syllabus: "Week 1: WhatsApp Business Basics\nWeek 2: Setting Up Automation\nWeek 3: Chatbot Development\nWeek 4: Broadcast Strategies\nWeek 5: Integration and Analytics",
        learning_outcomes: "Set up WhatsApp Business API\nCreate automated responses\nBuild chatbots\nManage customer conversations at scale\nIntegrate with CRM systems",
        instructor: 1,
        featured: true,
    },
];

// (name, text, course completed, achievement)
const TESTIMONIALS: &[(&str, &str, &str, &str)] = &[
    (
        "Tendai Mukono",
        "The Digital Marketing course transformed my career! I went from struggling to find clients to running a successful agency with 15 clients. The practical strategies actually work in Zimbabwe.",
        "Digital Marketing Basics",
        "Now running a 6-figure marketing agency",
    ),
    (
        "Grace Sibanda",
        "Best investment I ever made! The SEO course helped me rank my business on Google's first page. We've seen a 300% increase in organic traffic and sales have tripled.",
        "SEO Mastery",
        "Tripled business revenue in 6 months",
    ),
    (
        "James Nyathi",
        "I was skeptical about learning to code, but the Web Development course made it so easy. Now I'm building websites for clients and earning in USD!",
        "Web Development Essentials",
        "Earning $2000/month as a freelance developer",
    ),
    (
        "Rutendo Mpofu",
        "The AI for Business course opened my eyes to so many opportunities. I've automated 70% of my content creation and cut costs by half while doubling output.",
        "AI for Business",
        "Automated content creation, saved 20+ hours/week",
    ),
    (
        "Tafadzwa Moyo",
        "Thanks to the Facebook Ads course, my e-commerce store is now profitable. I'm getting a 4x return on ad spend and growing every month.",
        "Facebook & Google Ads Mastery",
        "4x ROAS on Facebook ads",
    ),
    (
        "Chipo Banda",
        "The Freelancing course gave me the confidence to quit my job and go full-time. I'm now working remotely for US clients and earning 3x my old salary.",
        "Freelancing & Remote Work",
        "Working remotely for international clients, 3x income",
    ),
    (
        "Simba Dube",
        "E-commerce Mastery helped me launch my online store. Within 3 months, I hit $10,000 in sales. The step-by-step guidance was invaluable.",
        "E-commerce Mastery",
        "$10,000 in first quarter sales",
    ),
    (
        "Pamela Ncube",
        "Content Monetization changed everything! I went from blogging for free to earning $1,500/month through affiliates and sponsored posts.",
        "Content Monetization",
        "$1,500/month passive income",
    ),
    (
        "Tinashe Khumalo",
        "The instructors are incredibly supportive. No-Code Development gave me the tools to build my startup idea without hiring developers. We just got our first 100 users!",
        "No-Code Development",
        "Launched startup, 100+ active users",
    ),
    (
        "Fungai Chirwa",
        "WhatsApp Automation has been a game-changer for my business. I can now handle 200+ customer conversations daily without hiring extra staff.",
        "WhatsApp Business Automation",
        "Automated customer service, 200+ daily conversations",
    ),
];

// (title, slug, content, excerpt, category, author)
const ARTICLES: &[(&str, &str, &str, &str, &str, &str)] = &[
    (
        "Top 10 Digital Marketing Trends in Zimbabwe for 2026",
        "top-10-digital-marketing-trends-zimbabwe-2026",
        "As Zimbabwe's digital landscape continues to evolve, businesses must stay ahead of emerging trends to remain competitive. Here are the top 10 digital marketing trends shaping 2026...",
        "Discover the latest digital marketing trends dominating Zimbabwe's business landscape in 2026.",
        "Digital Marketing",
        "Dr. Sarah Moyo",
    ),
    (
        "How I Built a Six-Figure Freelance Career from Harare",
        "six-figure-freelance-career-harare",
        "Three years ago, I was working a traditional 9-5 job earning $400 per month. Today, I run a thriving freelance business earning over $8,000 monthly, all from my home in Harare...",
        "A success story of building a profitable freelance career while living in Zimbabwe.",
        "Success Stories",
        "James Nyathi",
    ),
    (
        "SEO Strategies That Actually Work for Zimbabwean Businesses",
        "seo-strategies-zimbabwean-businesses",
        "Many Zimbabwean businesses struggle with SEO because they follow generic advice meant for Western markets. Here are SEO strategies specifically tailored for our local context...",
        "Proven SEO tactics designed specifically for the Zimbabwean market.",
        "SEO",
        "Dr. Sarah Moyo",
    ),
    (
        "5 AI Tools Every Zimbabwean Entrepreneur Should Use in 2026",
        "ai-tools-zimbabwean-entrepreneurs-2026",
        "Artificial intelligence is no longer just for big tech companies. Here are 5 AI tools that Zimbabwean entrepreneurs can use today to boost productivity and grow their businesses...",
        "Essential AI tools to supercharge your business productivity and growth.",
        "AI & Technology",
        "Michael Chikwanha",
    ),
    (
        "From Zero to Earning in USD: A Remote Work Guide for Zimbabweans",
        "remote-work-guide-zimbabweans",
        "The remote work revolution has opened unprecedented opportunities for Zimbabweans to earn in foreign currency. This comprehensive guide will show you exactly how to get started...",
        "Your complete roadmap to landing remote jobs and earning in USD from Zimbabwe.",
        "Career Advice",
        "Chipo Banda",
    ),
];

/// Populate `store` with the demo catalog, content, and demo student.
///
/// The demo student is enrolled in the first seeded course.
pub fn seed_demo_data<S: Storage + ?Sized>(store: &S) -> SeedSummary {
    let mut summary = SeedSummary::default();

    let instructor_ids: Vec<String> = INSTRUCTORS
        .iter()
        .map(|(name, title, bio, expertise)| {
            store
                .create_instructor(NewInstructor {
                    name: name.to_string(),
                    title: title.to_string(),
                    bio: bio.to_string(),
                    photo: None,
                    expertise: expertise.to_string(),
                })
                .id
        })
        .collect();
    summary.instructors = instructor_ids.len();

    let course_ids: Vec<String> = COURSES
        .iter()
        .map(|seed| {
            store
                .create_course(NewCourse {
                    title: seed.title.to_string(),
                    description: seed.description.to_string(),
                    category: seed.category.to_string(),
                    price_usd: seed.price_usd.to_string(),
                    price_zwl: seed.price_zwl.to_string(),
                    duration: seed.duration.to_string(),
                    level: seed.level.to_string(),
                    thumbnail: None,
                    syllabus: seed.syllabus.to_string(),
                    learning_outcomes: seed.learning_outcomes.to_string(),
                    instructor_id: instructor_ids[seed.instructor].clone(),
                    featured: seed.featured,
                })
                .id
        })
        .collect();
    summary.courses = course_ids.len();

    for (name, text, course_completed, achievement) in TESTIMONIALS {
        store.create_testimonial(NewTestimonial {
            name: name.to_string(),
            photo: None,
            text: text.to_string(),
            rating: 5,
            course_completed: course_completed.to_string(),
            achievement: Some(achievement.to_string()),
        });
        summary.testimonials += 1;
    }

    for (title, slug, content, excerpt, category, author) in ARTICLES {
        store.create_article(NewArticle {
            title: title.to_string(),
            slug: slug.to_string(),
            content: content.to_string(),
            excerpt: excerpt.to_string(),
            category: category.to_string(),
            thumbnail: None,
            author: author.to_string(),
        });
        summary.articles += 1;
    }

    let demo = store.create_user(NewUser {
        name: "Demo Student".to_string(),
        email: DEMO_EMAIL.to_string(),
        phone: Some("+263771234567".to_string()),
        password_hash: hash_password(DEMO_PASSWORD),
        role: Role::Student,
    });
    summary.users = 1;

    if let Some(first_course) = course_ids.first() {
        store.create_enrollment(NewEnrollment {
            user_id: demo.id,
            course_id: first_course.clone(),
            payment_method: "Ecocash".to_string(),
        });
        summary.enrollments = 1;
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::verify_password;
    use crate::storage::{
        ArticleRepository, CourseRepository, EnrollmentRepository, InstructorRepository,
        MemStorage, TestimonialRepository, UserRepository,
    };

    #[test]
    fn test_seed_counts() {
        let store = MemStorage::new();
        let summary = seed_demo_data(&store);

        assert_eq!(summary.instructors, 2);
        assert_eq!(summary.courses, 10);
        assert_eq!(summary.testimonials, 10);
        assert_eq!(summary.articles, 5);
        assert_eq!(store.get_all_courses().len(), 10);
        assert_eq!(store.get_all_instructors().len(), 2);
        assert_eq!(store.get_all_testimonials().len(), 10);
        assert_eq!(store.get_all_articles().len(), 5);
    }

    #[test]
    fn test_demo_user_is_student() {
        let store = MemStorage::seeded();
        let user = store.get_user_by_email(DEMO_EMAIL).unwrap();

        assert_eq!(user.role, Role::Student);
        assert_eq!(user.name, "Demo Student");
        assert_ne!(user.password_hash, DEMO_PASSWORD);
        assert!(verify_password(DEMO_PASSWORD, &user.password_hash));
    }

    #[test]
    fn test_demo_enrollment_in_first_course() {
        let store = MemStorage::seeded();
        let user = store.get_user_by_email(DEMO_EMAIL).unwrap();
        let enrollments = store.get_enrollments_by_user_id(&user.id);

        assert_eq!(enrollments.len(), 1);
        let first_course = &store.get_all_courses()[0];
        assert_eq!(enrollments[0].course_id, first_course.id);
        assert_eq!(first_course.title, "Digital Marketing Basics");
        assert_eq!(enrollments[0].payment_method, "Ecocash");
        assert_eq!(enrollments[0].progress, 0);
    }

    #[test]
    fn test_courses_reference_seeded_instructors() {
        let store = MemStorage::seeded();
        for course in store.get_all_courses() {
            assert!(store.get_instructor(&course.instructor_id).is_some());
        }
        assert_eq!(store.get_featured_courses().len(), 6);
    }
}
