use conference_kit_core::Language;

/// Fixed interface text of the landing page in one language
#[derive(Debug)]
pub struct Labels {
    pub language_name: &'static str,
    /// chrono format string for the event date
    pub date_format: &'static str,
    pub nav_about: &'static str,
    pub nav_program: &'static str,
    pub nav_venue: &'static str,
    pub nav_walkthrough: &'static str,
    pub countdown_title: &'static str,
    pub countdown_started: &'static str,
    pub days: &'static str,
    pub hours: &'static str,
    pub minutes: &'static str,
    pub seconds: &'static str,
    pub register: &'static str,
    pub time: &'static str,
    pub all_venues: &'static str,
    pub speaker: &'static str,
    pub affiliation: &'static str,
    pub close: &'static str,
    pub empty_program: &'static str,
    pub build_version: &'static str,
    pub build_time: &'static str,
    /// Walk-through page text used when the data file leaves it out
    pub walkthrough_title: &'static str,
    pub walkthrough_subtitle: &'static str,
    pub walkthrough_description: &'static str,
    pub walkthrough_start: &'static str,
    pub walkthrough_empty: &'static str,
}

static KO: Labels = Labels {
    language_name: "한국어",
    date_format: "%Y년 %-m월 %-d일",
    nav_about: "소개",
    nav_program: "프로그램",
    nav_venue: "장소",
    nav_walkthrough: "실습 체험",
    countdown_title: "행사 시작까지",
    countdown_started: "행사가 진행 중입니다",
    days: "일",
    hours: "시간",
    minutes: "분",
    seconds: "초",
    register: "등록하기",
    time: "시간",
    all_venues: "전체",
    speaker: "발표자",
    affiliation: "소속",
    close: "닫기",
    empty_program: "프로그램이 아직 공개되지 않았습니다.",
    build_version: "버전",
    build_time: "빌드 시각",
    walkthrough_title: "실습 체험",
    walkthrough_subtitle: "다양한 기술 분야의 실습을 직접 체험해보세요",
    walkthrough_description: "컨퍼런스에서 제공하는 다양한 실습 프로그램을 통해 실제 기술을 경험하고 학습할 수 있습니다.",
    walkthrough_start: "체험 시작",
    walkthrough_empty: "공개된 실습이 아직 없습니다.",
};

static EN: Labels = Labels {
    language_name: "English",
    date_format: "%B %-d, %Y",
    nav_about: "About",
    nav_program: "Program",
    nav_venue: "Venue",
    nav_walkthrough: "Hands-on",
    countdown_title: "Starts in",
    countdown_started: "The conference is underway",
    days: "days",
    hours: "hours",
    minutes: "minutes",
    seconds: "seconds",
    register: "Register",
    time: "Time",
    all_venues: "All venues",
    speaker: "Speaker",
    affiliation: "Affiliation",
    close: "Close",
    empty_program: "The program has not been announced yet.",
    build_version: "Version",
    build_time: "Built",
    walkthrough_title: "Hands-on Walkthroughs",
    walkthrough_subtitle: "Try a range of technologies yourself",
    walkthrough_description: "Learn by doing with the hands-on programs offered at the conference.",
    walkthrough_start: "Start Experience",
    walkthrough_empty: "No walkthroughs have been published yet.",
};

pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::Ko => &KO,
        Language::En => &EN,
    }
}
