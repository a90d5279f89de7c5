//! Static content shown by the screens.

pub const APP_TITLE: &str = "SAJH Health Monitor";
pub const DRAWER_FOOTER: &str = "Stay healthy, stay happy! 🌟";

pub const HOME_WELCOME: &str =
    "Track your health, monitor symptoms, and stay on top of your wellness journey.";

pub static HYDRATION_TIPS: [&str; 4] = [
    "Drink a glass of water when you wake up",
    "Set reminders throughout the day",
    "Eat water-rich fruits and vegetables",
    "Drink before, during, and after exercise",
];

/// A food group card on the nutrition guide.
///
pub struct NutritionTip {
    pub category: &'static str,
    pub description: &'static str,
    pub examples: &'static str,
}

pub static NUTRITION_TIPS: [NutritionTip; 5] = [
    NutritionTip {
        category: "Fruits & Vegetables",
        description: "Aim for 5-9 servings per day",
        examples: "Apples, spinach, carrots, berries, broccoli",
    },
    NutritionTip {
        category: "Whole Grains",
        description: "Choose whole grains over refined grains",
        examples: "Brown rice, quinoa, oats, whole wheat bread",
    },
    NutritionTip {
        category: "Lean Proteins",
        description: "Include protein in every meal",
        examples: "Fish, chicken, beans, tofu, eggs, nuts",
    },
    NutritionTip {
        category: "Healthy Fats",
        description: "Essential for brain and heart health",
        examples: "Avocados, olive oil, nuts, seeds, fatty fish",
    },
    NutritionTip {
        category: "Dairy/Alternatives",
        description: "For calcium and vitamin D",
        examples: "Milk, yogurt, cheese, fortified plant milks",
    },
];

pub static NUTRITION_GENERAL_TIPS: [&str; 5] = [
    "Eat regular meals and healthy snacks",
    "Stay hydrated throughout the day",
    "Limit processed foods and added sugars",
    "Practice portion control",
    "Listen to your body's hunger cues",
];

pub const MEAL_PLANNING: &str = "Plan your meals ahead of time to ensure balanced nutrition and avoid \
impulsive food choices. Include a variety of colors and food groups in each meal.";

pub static COMMON_SYMPTOMS: [&str; 12] = [
    "Headache",
    "Fever",
    "Cough",
    "Sore Throat",
    "Fatigue",
    "Nausea",
    "Dizziness",
    "Chest Pain",
    "Shortness of Breath",
    "Stomach Pain",
    "Joint Pain",
    "Skin Rash",
];

/// Symptoms that escalate the advice to seeking medical attention.
///
pub static SERIOUS_SYMPTOMS: [&str; 3] = ["Chest Pain", "Shortness of Breath", "Severe Headache"];

pub const SYMPTOM_DISCLAIMER: &str = "⚠️ This tool is for informational purposes only and should \
not replace professional medical advice.";

pub static EMERGENCY_SIGNS: [&str; 5] = [
    "Severe chest pain or pressure",
    "Difficulty breathing",
    "Sudden severe headache",
    "Loss of consciousness",
    "Signs of stroke (F.A.S.T.)",
];

pub static MEDICATION_REMINDERS: [&str; 4] = [
    "Set alarms for medication times",
    "Keep medications in a visible location",
    "Use a pill organizer for weekly planning",
    "Never skip doses without consulting your doctor",
];

pub static MOOD_EMOJIS: [&str; 5] = ["😢", "😔", "😐", "🙂", "😊"];
pub static MOOD_LABELS: [&str; 5] = ["Very Sad", "Sad", "Neutral", "Happy", "Very Happy"];
pub static STRESS_EMOJIS: [&str; 5] = ["😌", "😊", "😐", "😰", "😱"];
pub static STRESS_LABELS: [&str; 5] = [
    "Very Relaxed",
    "Relaxed",
    "Neutral",
    "Stressed",
    "Very Stressed",
];

pub static MENTAL_HEALTH_TIPS: [&str; 7] = [
    "Practice deep breathing exercises",
    "Stay connected with friends and family",
    "Get regular physical exercise",
    "Maintain a regular sleep schedule",
    "Practice mindfulness or meditation",
    "Limit social media if it affects your mood",
    "Seek professional help when needed",
];

pub static HELPLINES: [&str; 2] = [
    "Call 988 (Suicide & Crisis Lifeline)",
    "Text \"HELLO\" to 741741 (Crisis Text Line)",
];

/// A category of the health tips screen.
///
pub struct TipCategory {
    pub category: &'static str,
    pub icon: &'static str,
    pub tips: [&'static str; 4],
}

pub static HEALTH_TIPS: [TipCategory; 5] = [
    TipCategory {
        category: "Exercise & Fitness",
        icon: "🏃",
        tips: [
            "Aim for at least 150 minutes of moderate exercise per week",
            "Take the stairs instead of elevators when possible",
            "Try to stand and move for 5 minutes every hour",
            "Include both cardio and strength training in your routine",
        ],
    },
    TipCategory {
        category: "Sleep & Rest",
        icon: "😴",
        tips: [
            "Aim for 7-9 hours of sleep per night",
            "Keep a consistent sleep schedule",
            "Avoid screens 1 hour before bedtime",
            "Create a relaxing bedtime routine",
        ],
    },
    TipCategory {
        category: "Stress Management",
        icon: "🧘",
        tips: [
            "Practice deep breathing exercises daily",
            "Try meditation or mindfulness apps",
            "Take regular breaks from work",
            "Connect with friends and family regularly",
        ],
    },
    TipCategory {
        category: "Preventive Care",
        icon: "🩺",
        tips: [
            "Schedule regular check-ups with your doctor",
            "Keep up with recommended screenings",
            "Get vaccinated according to guidelines",
            "Know your family medical history",
        ],
    },
    TipCategory {
        category: "Hygiene & Safety",
        icon: "🧼",
        tips: [
            "Wash hands frequently for 20 seconds",
            "Use sunscreen with SPF 30+ daily",
            "Brush teeth twice daily and floss",
            "Wear seatbelts and helmets when appropriate",
        ],
    },
];

pub static WEEKLY_GOALS: [&str; 5] = [
    "Drink 8 glasses of water daily",
    "Exercise for 30 minutes, 5 times a week",
    "Eat 5 servings of fruits and vegetables daily",
    "Get 7-8 hours of sleep each night",
    "Practice stress-reduction techniques",
];

/// An external resource linked from the health tips screen.
///
pub struct Resource {
    pub title: &'static str,
    pub url: &'static str,
}

pub static RESOURCES: [Resource; 3] = [
    Resource {
        title: "CDC Healthy Living Guidelines",
        url: "https://www.cdc.gov/healthyliving/index.html",
    },
    Resource {
        title: "WHO Health Fact Sheets",
        url: "https://www.who.int/news-room/fact-sheets",
    },
    Resource {
        title: "Mayo Clinic Healthy Living",
        url: "https://www.mayoclinic.org/healthy-lifestyle",
    },
];

pub const TIPS_REMINDER: &str = "These tips are for general wellness. Always consult with \
healthcare professionals for personalized medical advice and before making significant changes \
to your health routine.";
