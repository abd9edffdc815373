//! Affirmation art catalog.
//!
//! Entries are listed in their merchandising order: the first page holds the
//! featured "best picks", later entries are the newest additions.

use super::{Affirmation, AffirmationCategory};

pub(super) static AFFIRMATIONS: &[Affirmation] = &[
    Affirmation {
        id: "aff-001",
        title: "I am worthy of rest",
        category: AffirmationCategory::SelfLove,
        description: "A gentle reminder that rest is your birthright. This design gives you permission to pause and honor your need for restoration.",
        image: "/static/images/affirmations/affirmation-rest.jpg",
        featured: true,
        tags: &["rest", "self-care", "boundaries"],
        rating: 4.9,
        review_count: 2847,
        badge: Some("Best Seller"),
    },
    Affirmation {
        id: "aff-002",
        title: "I am worthy of peace",
        category: AffirmationCategory::SelfLove,
        description: "Peace is your birthright. This serene design reminds you that inner tranquility comes from within and is always available to you.",
        image: "/static/images/affirmations/affirmation-joy.jpg",
        featured: true,
        tags: &["peace", "tranquility", "calm"],
        rating: 4.8,
        review_count: 2914,
        badge: Some("Staff Pick"),
    },
    Affirmation {
        id: "aff-003",
        title: "Growth is a journey, not a destination",
        category: AffirmationCategory::Strength,
        description: "Embrace the beauty of becoming. This affirmation celebrates progress over perfection and reminds you that every step forward matters.",
        image: "/static/images/affirmations/affirmation-abundance.jpg",
        featured: true,
        tags: &["growth", "journey", "patience", "progress"],
        rating: 4.9,
        review_count: 2127,
        badge: Some("Most Popular"),
    },
    Affirmation {
        id: "aff-004",
        title: "I trust my journey",
        category: AffirmationCategory::Strength,
        description: "Release the need for control and embrace faith in your path. Trust means believing you are equipped to handle whatever comes.",
        image: "/static/images/affirmations/affirmation-trust.jpg",
        featured: false,
        tags: &["trust", "journey", "faith"],
        rating: 4.4,
        review_count: 1923,
        badge: None,
    },
    Affirmation {
        id: "aff-005",
        title: "I am always enough",
        category: AffirmationCategory::SelfLove,
        description: "Your worth is not tied to productivity or achievement. You are inherently valuable simply because you exist.",
        image: "/static/images/affirmations/affirmation-enough.jpg",
        featured: true,
        tags: &["self-love", "worthiness", "acceptance"],
        rating: 4.9,
        review_count: 2928,
        badge: Some("Best Seller"),
    },
    Affirmation {
        id: "aff-006",
        title: "My calmness is my power",
        category: AffirmationCategory::Strength,
        description: "In chaos, your calmness is your superpower. Peace is not passive—it is revolutionary. When you choose calmness, you reclaim your power.",
        image: "/static/images/affirmations/affirmation-calm.jpg",
        featured: true,
        tags: &["calm", "power", "peace"],
        rating: 4.8,
        review_count: 2631,
        badge: Some("Staff Pick"),
    },
    Affirmation {
        id: "aff-007",
        title: "I receive what I desire",
        category: AffirmationCategory::Abundance,
        description: "Your desires are signposts to your purpose. Release resistance and allow blessings to flow into your life.",
        image: "/static/images/affirmations/affirmation-receive.jpg",
        featured: false,
        tags: &["receiving", "desire", "manifestation"],
        rating: 4.6,
        review_count: 1456,
        badge: None,
    },
    Affirmation {
        id: "aff-008",
        title: "Today, I honor myself",
        category: AffirmationCategory::SelfLove,
        description: "Small acts of self-honor create a life you do not need to escape from. Make choices that respect your needs.",
        image: "/static/images/affirmations/affirmation-honor.jpg",
        featured: false,
        tags: &["honor", "self-care", "daily"],
        rating: 4.3,
        review_count: 982,
        badge: None,
    },
    Affirmation {
        id: "aff-009",
        title: "I release what no longer serves",
        category: AffirmationCategory::Strength,
        description: "Letting go makes room for what is truly meant for you. Release old patterns and beliefs that no longer align with your highest good.",
        image: "/static/images/affirmations/affirmation-release.jpg",
        featured: false,
        tags: &["release", "letting-go", "growth"],
        rating: 4.7,
        review_count: 2145,
        badge: None,
    },
    Affirmation {
        id: "aff-010",
        title: "Joy is my natural state",
        category: AffirmationCategory::Joy,
        description: "Happiness is not a destination—it is your birthright to claim. Stop chasing joy and start embodying it.",
        image: "/static/images/affirmations/affirmation-natural-joy.jpg",
        featured: false,
        tags: &["joy", "natural", "happiness"],
        rating: 4.5,
        review_count: 1672,
        badge: None,
    },
    Affirmation {
        id: "aff-011",
        title: "I am safe in my body",
        category: AffirmationCategory::SelfLove,
        description: "Your body is your home, not your enemy. This grounding affirmation offers comfort for healing your relationship with your physical self.",
        image: "/static/images/affirmations/affirmation-safe.jpg",
        featured: false,
        tags: &["body", "safety", "acceptance"],
        rating: 4.8,
        review_count: 1834,
        badge: None,
    },
    Affirmation {
        id: "aff-012",
        title: "My voice matters",
        category: AffirmationCategory::Strength,
        description: "Speak your truth, even when your voice shakes. Your voice carries power, and the world needs what you have to say.",
        image: "/static/images/affirmations/affirmation-voice.jpg",
        featured: false,
        tags: &["voice", "truth", "courage"],
        rating: 4.2,
        review_count: 1245,
        badge: None,
    },
    Affirmation {
        id: "aff-013",
        title: "I am worthy of the life I desire",
        category: AffirmationCategory::Abundance,
        description: "The life you envision chose you for a reason—honor it. You are worthy of everything you desire simply because of who you are.",
        image: "/static/images/affirmations/affirmation-dreams.jpg",
        featured: false,
        tags: &["dreams", "worthiness", "purpose"],
        rating: 4.7,
        review_count: 2387,
        badge: None,
    },
    Affirmation {
        id: "aff-014",
        title: "I choose peace over perfection",
        category: AffirmationCategory::Rest,
        description: "Perfection is exhausting—peace is possible. Give yourself permission to be human and make mistakes.",
        image: "/static/images/affirmations/affirmation-peace.jpg",
        featured: false,
        tags: &["peace", "perfection", "rest"],
        rating: 4.6,
        review_count: 1563,
        badge: None,
    },
    Affirmation {
        id: "aff-015",
        title: "I celebrate every small win",
        category: AffirmationCategory::Joy,
        description: "Every small win deserves recognition. Honor your journey and acknowledge how far you have come—each step forward matters.",
        image: "/static/images/affirmations/affirmation-progress.jpg",
        featured: false,
        tags: &["progress", "celebration", "growth"],
        rating: 4.1,
        review_count: 1124,
        badge: None,
    },
    Affirmation {
        id: "aff-016",
        title: "My intuition guides me",
        category: AffirmationCategory::Strength,
        description: "That whisper inside knows the way. Your intuition is your soul's GPS, guiding you toward alignment.",
        image: "/static/images/affirmations/affirmation-intuition.jpg",
        featured: false,
        tags: &["intuition", "guidance", "inner-wisdom"],
        rating: 4.7,
        review_count: 1987,
        badge: None,
    },
    Affirmation {
        id: "aff-017",
        title: "I am open to miracles",
        category: AffirmationCategory::Abundance,
        description: "Magic happens when you believe it can. Release cynicism and open your heart to unexpected blessings.",
        image: "/static/images/affirmations/affirmation-miracles.jpg",
        featured: false,
        tags: &["miracles", "magic", "possibility"],
        rating: 4.5,
        review_count: 1698,
        badge: None,
    },
    Affirmation {
        id: "aff-018",
        title: "I give myself permission to feel",
        category: AffirmationCategory::SelfLove,
        description: "All feelings are welcome here. Your emotions are not weaknesses—they are wisdom, telling you what you need.",
        image: "/static/images/affirmations/affirmation-feel.jpg",
        featured: false,
        tags: &["feelings", "permission", "vulnerability"],
        rating: 4.8,
        review_count: 2214,
        badge: None,
    },
    Affirmation {
        id: "aff-019",
        title: "I am creating the life I desire",
        category: AffirmationCategory::Strength,
        description: "Every choice is a brushstroke. You are not a passive recipient of life—you are an active creator.",
        image: "/static/images/affirmations/affirmation-creating.jpg",
        featured: false,
        tags: &["creation", "life", "intention"],
        rating: 4.4,
        review_count: 1445,
        badge: None,
    },
    Affirmation {
        id: "aff-020",
        title: "Today is full of possibility",
        category: AffirmationCategory::Joy,
        description: "Each sunrise brings infinite potential. Today is a blank canvas full of opportunities you have not yet imagined.",
        image: "/static/images/affirmations/affirmation-possibility.jpg",
        featured: false,
        tags: &["possibility", "potential", "today"],
        rating: 3.9,
        review_count: 1089,
        badge: None,
    },
    Affirmation {
        id: "aff-021",
        title: "I am allowed to change my mind",
        category: AffirmationCategory::SelfLove,
        description: "Growth requires evolution. Changing your mind is not failure—it is wisdom. You do not owe anyone consistency at the cost of authenticity.",
        image: "/static/images/affirmations/affirmation-change.jpg",
        featured: false,
        tags: &["change", "growth", "permission"],
        rating: 4.6,
        review_count: 1523,
        badge: None,
    },
    Affirmation {
        id: "aff-022",
        title: "My rest is productive",
        category: AffirmationCategory::Rest,
        description: "Rest is not laziness—it is how you recharge your magic. Rest is the foundation of sustainable productivity.",
        image: "/static/images/affirmations/affirmation-productive-rest.jpg",
        featured: false,
        tags: &["rest", "productivity", "recharge"],
        rating: 4.7,
        review_count: 1876,
        badge: None,
    },
    Affirmation {
        id: "aff-023",
        title: "I attract what I embody",
        category: AffirmationCategory::Abundance,
        description: "Become the energy you wish to attract. You do not attract what you want—you attract who you are.",
        image: "/static/images/affirmations/affirmation-attract.jpg",
        featured: false,
        tags: &["attraction", "embodiment", "energy"],
        rating: 4.8,
        review_count: 2456,
        badge: None,
    },
    Affirmation {
        id: "aff-024",
        title: "I am both the storm and the calm",
        category: AffirmationCategory::Strength,
        description: "You contain multitudes. You can be strong and soft, fierce and gentle. Embrace all aspects of yourself without apology.",
        image: "/static/images/affirmations/affirmation-duality.jpg",
        featured: false,
        tags: &["duality", "wholeness", "acceptance"],
        rating: 4.5,
        review_count: 1334,
        badge: None,
    },
];
