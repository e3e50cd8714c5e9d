//! Static guide content shown on the dashboard. Read-only, fixed at build time.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Place {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransportRate {
    pub mode: &'static str,
    pub detail: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const GUIDE_TITLE: &str = "✨ Indore Travel Planner";
pub const GUIDE_LOCATION: &str = "Indore, Madhya Pradesh 🇮🇳";

pub const DESTINATIONS: &[Place] = &[
    Place { title: "🏯 Rajwada Palace", description: "Historic royal palace in the heart of Indore." },
    Place { title: "🏰 Lal Bagh Palace", description: "Royal heritage museum and garden." },
    Place { title: "🍢 Sarafa Bazaar", description: "Famous evening food market. Opens after 7 PM." },
    Place { title: "🍜 Chhappan Dukaan", description: "Foodie paradise with 56 shops." },
    Place { title: "🪞 Kanch Mandir", description: "Beautiful Jain temple made of glass." },
];

pub const STAYS: &[Place] = &[
    Place { title: "🏨 Radisson Blu", description: "Luxury stay near the airport." },
    Place { title: "⭐ Sayaji Hotel", description: "Premium 5-star hotel." },
    Place { title: "🛏 Hotel Tuli Inn", description: "Mid-range, clean, and central." },
    Place { title: "💰 Budget Hotels", description: "OYO, Treebo — affordable & reliable." },
];

pub const TRANSPORT: &[TransportRate] = &[
    TransportRate { mode: "Auto", detail: "₹30–₹50" },
    TransportRate { mode: "Cab", detail: "₹8–₹12/km" },
    TransportRate { mode: "Car rental", detail: "₹1500–₹2500/day" },
    TransportRate { mode: "Railway", detail: "Indore Junction (INDB)" },
    TransportRate { mode: "Airport", detail: "Devi Ahilya Bai Holkar (IDR)" },
];

pub const FAQ: &[FaqEntry] = &[
    FaqEntry { question: "Best time to visit?", answer: "October to March — perfect weather!" },
    FaqEntry { question: "Safe for solo travelers?", answer: "Yes! Indore is clean, safe, and friendly." },
    FaqEntry { question: "Must-try foods?", answer: "Poha, Jalebi, Garadu, Bhutte ka Kees!" },
];

impl TransportRate {
    pub fn icon(&self) -> &'static str {
        match self.mode {
            "Auto" => "🛺",
            "Cab" => "🚕",
            "Car rental" => "🔑",
            "Railway" => "🚆",
            "Airport" => "✈",
            _ => "•",
        }
    }
}
