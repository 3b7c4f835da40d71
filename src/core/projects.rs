use glam::Vec2;

/// A project shown as a constellation in the universe view.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectMarker {
    pub id: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub link: &'static str,
    pub technologies: &'static [&'static str],
    /// Position inside one section, in px from the band's left edge.
    pub position: Vec2,
}

/// Which copy of the marker band an instance lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    Before,
    Primary,
    After,
}

impl Band {
    pub const ALL: [Band; 3] = [Band::Before, Band::Primary, Band::After];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Band::Before => 0,
            Band::Primary => 1,
            Band::After => 2,
        }
    }

    #[inline]
    pub fn id_suffix(self) -> &'static str {
        match self {
            Band::Before => "-clone-before",
            Band::Primary => "",
            Band::After => "-clone-after",
        }
    }
}

/// One rendered copy of a marker.
#[derive(Clone, Debug, PartialEq)]
pub struct BandInstance {
    pub id: String,
    pub band: Band,
    pub position: Vec2,
    pub marker: &'static ProjectMarker,
}

/// Replicate the markers into the before / primary / after bands.
pub fn band_instances(
    markers: &'static [ProjectMarker],
    section_width: f64,
) -> Vec<BandInstance> {
    Band::ALL
        .iter()
        .flat_map(|&band| {
            let shift = section_width as f32 * band.index() as f32;
            markers.iter().map(move |m| BandInstance {
                id: format!("{}{}", m.id, band.id_suffix()),
                band,
                position: m.position + Vec2::new(shift, 0.0),
                marker: m,
            })
        })
        .collect()
}

/// Map a (possibly suffixed) instance id back to its marker.
pub fn find_marker(instance_id: &str) -> Option<&'static ProjectMarker> {
    let base = instance_id
        .strip_suffix(Band::Before.id_suffix())
        .or_else(|| instance_id.strip_suffix(Band::After.id_suffix()))
        .unwrap_or(instance_id);
    PROJECTS.iter().find(|p| p.id == base)
}

pub static PROJECTS: [ProjectMarker; 8] = [
    ProjectMarker {
        id: "phoenix",
        name: "Phoenix",
        title: "Campus-Rush",
        description: "\"Campus Rush\" is a captivating  interactive comic that talks about NYUAD students real experiences of how to use a 10 minute break in between classes effectively. As a web designer, I designed the website using the cava as well as made the storyline so that not only NYUAD students but also all the students in the world can resonate with it.",
        image: "assets/constellation-phoenix.png",
        link: "https://darveloff.github.io/comics/",
        technologies: &["HTML", "CSS", "JavaScript", "Canva"],
        position: Vec2::new(200.0, 300.0),
    },
    ProjectMarker {
        id: "unicorn",
        name: "Unicorn",
        title: "Shota's Productive Daily Routine",
        description: "This is a website about my productive daily routine, teaching my audience how to spend a day productively. I used html, CSS, and Javascript to create this website, and used canva to create the wireframe.",
        image: "assets/constellation-unicorn.png",
        link: "https://kimshota.github.io/Communications-Lab-Assignment1/",
        technologies: &["HTML", "CSS", "JavaScript"],
        position: Vec2::new(700.0, 230.0),
    },
    ProjectMarker {
        id: "wolf",
        name: "Wolf",
        title: "Laundry Adventure",
        description: "\u{201c}Laundry Adventure\u{201d} is an interactive short film that highlights real experiences students face in the laundry room, such as people removing clothes before they\u{2019}re finished or even stealing items. I played the main character, whose favorite socks get stolen by someone. As the executive web developer, I created an interactive website where users can explore different pathways to learn how they should respond in situations where their clothes are taken.",
        image: "assets/constellation-wolf.png",
        link: "https://kimshota.github.io/laundry-story/",
        technologies: &["HTML", "CSS", "JavaScript"],
        position: Vec2::new(1200.0, 300.0),
    },
    ProjectMarker {
        id: "dragon",
        name: "Dragon",
        title: "Sound Detective",
        description: "\u{201c}Sound Detective\u{201d} is an interactive website where users restore music to a silent world by identifying instruments in distorted audio tracks after a global phenomenon called the \u{201c}Great Sound Distortion\u{201d} has erased all sound. As an executive web developer, I created an interactive, creepy website using HTML, CSS, and JS to effectively talk about the story. As a sound recorder, I used multiple professional sound equipment to record various instruments.",
        image: "assets/constellation-dragon.png",
        link: "https://kimshota.github.io/sound-detective/",
        technologies: &["HTML", "CSS", "JavaScript", "Sound Equipment"],
        position: Vec2::new(1700.0, 230.0),
    },
    ProjectMarker {
        id: "owl",
        name: "Owl",
        title: "Brainlot",
        description: "BrainLot is a mobile learning app that infinitely generates MCQs from images or text input using AI and delivers them in a TikTok-style, infinite scrolling experience. I built the full end-to-end system, integrating local LLMs (llama.rn) and cloud models (Groq), implementing secure subscription verification with Supabase Edge Functions and RevenueCat, and designing a scalable backend with RLS, RPC functions, rate-limits, and upload controls. I also developed the React Native frontend, created the AI-powered MCQ generation pipeline with OCR and text chunking, and implemented secure authentication, purchase validation, and data-access enforcement.",
        image: "assets/constellation-owl.png",
        link: "https://github.com/KimShota/Brainlot",
        technologies: &[
            "React Native",
            "TypeScript",
            "Supabase (Auth, Database, RLS)",
            "Backend with Deno Edge Functions",
            "PostgreSQL",
            "RevenueCat",
            "AI integration (Groq, Local LLMs)",
            "OCR pipelines (Google ML Kit)",
        ],
        position: Vec2::new(2200.0, 300.0),
    },
    ProjectMarker {
        id: "bear",
        name: "Bear",
        title: "ZEN EYE Pro",
        description: "ZEN EYE Pro is a VR-based eye-tracking system that measures mental fatigue in just one minute by analyzing gaze patterns and blink behaviors in realistic environments, demonstrating strong ecological validity and objective accuracy. I built the system as the lead VR engineer and data scientist\u{2014}programming the full Unity eye-tracking pipeline, creating real-time analytics tools, and developing the machine-learning models that processed gaze and blink data from over 2,000 participants. This work led to a validated fatigue assessment formula, 30% accuracy improvement, $163K in funding, and recognition as a Real Madrid Next Accelerator finalist, Startup World Cup top-10 finalist, and coverage on NIKKEI TV.",
        image: "assets/constellation-bear.png",
        link: "https://github.com/KimShota/ZEN-EYE",
        technologies: &[
            "Python",
            "C#",
            "C++",
            "Unity",
            "Unreal Engine",
            "Blender",
            "PICO enterprise (VR)",
        ],
        position: Vec2::new(2700.0, 230.0),
    },
    ProjectMarker {
        id: "deer",
        name: "Deer",
        title: "Short Content Creator",
        description: "I have helped 200,000 students all around the world enhance their study efficiency and ace their exams on multiple social media platforms, such as Instagram and TikTok. Having made numerous study guides, I kept hitting millions of views on multiple videos and created my own study community to support them throughout their academic careers.",
        image: "assets/constellation-deer.png",
        link: "https://www.instagram.com/shotacademic/",
        technologies: &[
            "CapCut",
            "Resolve Davinci",
            "Communication Skills",
            "Problem-Solving Skills",
            "Data Analysis",
        ],
        position: Vec2::new(3200.0, 300.0),
    },
    ProjectMarker {
        id: "butterfly",
        name: "Butterfly",
        title: "VR Airflow Visualization",
        description: "I engineered a real-time VR visualization pipeline in Unity and Blender that rendered over 50,000 airflow velocity vectors at 90 FPS through aggressive mesh batching and draw-call optimization. I reduced draw calls by 95% and stabilized frame time under 11 ms, enabling smooth exploration of large-scale flow fields in VR. I also built a Python preprocessing toolchain that downsampled massive fluid-dynamics datasets by over 90% while preserving critical flow magnitude and angle information.",
        image: "assets/constellation-butterfly.png",
        link: "https://github.com/KimShota/Airflow-ModelHouse",
        technologies: &["C#", "Python", "Unity", "Blender"],
        position: Vec2::new(3700.0, 230.0),
    },
];
