//! Static page copy
//!
//! Sections treat everything here as opaque text. [`SiteContent::default`]
//! carries the production copy; tests and previews may deserialize partial
//! overrides on top of it.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// A labelled link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Link text
    pub label: String,
    /// Target anchor
    pub href: String,
}

impl NavLink {
    /// Create a link
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Heading pair shown above a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Small uppercase eyebrow
    pub subtitle: String,
    /// Main heading
    pub title: String,
}

impl Heading {
    fn new(subtitle: &str, title: &str) -> Self {
        Self {
            subtitle: subtitle.to_string(),
            title: title.to_string(),
        }
    }
}

/// Title and one-line description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Short title
    pub title: String,
    /// Description
    pub description: String,
}

impl Item {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Label / value row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    /// Row label
    pub label: String,
    /// Row value
    pub value: String,
}

/// Brand identity shared by the navbar, profile and footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Brand name
    pub name: String,
    /// Line under the brand name
    pub byline: String,
    /// Company name used in the copyright line
    pub company: String,
    /// Logo image URL
    pub logo_url: String,
    /// Logo alt text
    pub logo_alt: String,
}

/// Hero block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    /// Badge above the headline
    pub badge: String,
    /// Headline before the accented word
    pub headline_lead: String,
    /// Accented word
    pub headline_accent: String,
    /// Headline after the accented word
    pub headline_tail: String,
    /// Lead paragraph
    pub body: String,
    /// Primary call to action
    pub primary_cta: NavLink,
    /// Secondary call to action
    pub secondary_cta: NavLink,
    /// Hero image URL
    pub image_url: String,
    /// Hero image alt text
    pub image_alt: String,
    /// Floating stat label
    pub stat_label: String,
    /// Floating stat value
    pub stat_value: String,
}

/// Problem statement block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemContent {
    /// Section heading
    pub heading: Heading,
    /// Explanatory paragraph
    pub body: String,
    /// Pain points
    pub problems: Vec<String>,
}

/// Solution block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionContent {
    /// Eyebrow
    pub eyebrow: String,
    /// Headline lines
    pub headline: Vec<String>,
    /// Oversized watermark word
    pub watermark: String,
    /// Explanatory paragraph
    pub body: String,
    /// Pillars
    pub pillars: Vec<Item>,
}

/// Services block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicesContent {
    /// Section heading
    pub heading: Heading,
    /// Service cards; `title` is the service name, `description` its purpose
    pub services: Vec<Item>,
}

/// Strengths block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthsContent {
    /// Section heading
    pub heading: Heading,
    /// Strength statements
    pub strengths: Vec<String>,
    /// Method panel title
    pub method_title: String,
    /// Method keywords
    pub methods: Vec<String>,
}

/// One case study
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    /// Engagement
    pub title: String,
    /// Headline result
    pub result: String,
    /// What was done
    pub description: String,
}

/// Achievements block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementsContent {
    /// Section heading
    pub heading: Heading,
    /// Label prefix for each case ("事例 1")
    pub case_label: String,
    /// Case studies
    pub cases: Vec<CaseStudy>,
}

/// Representative profile block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepresentativeContent {
    /// Portrait URL
    pub portrait_url: String,
    /// Portrait alt text
    pub portrait_alt: String,
    /// Role line on the name card
    pub role: String,
    /// Name in Japanese
    pub name: String,
    /// Name in Latin script
    pub name_latin: String,
    /// Eyebrow above the quote
    pub eyebrow: String,
    /// Quote before the accented word
    pub quote_lead: String,
    /// Accented word in the quote
    pub quote_accent: String,
    /// Quote after the accented word
    pub quote_tail: String,
    /// Message paragraphs
    pub message: Vec<String>,
    /// Signature caption
    pub signature_caption: String,
    /// Signature name
    pub signature_name: String,
}

/// Company facts block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyContent {
    /// Section heading
    pub heading: Heading,
    /// Company facts
    pub facts: Vec<Fact>,
}

/// Contact block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactContent {
    /// Headline lines
    pub headline: Vec<String>,
    /// Explanatory paragraph
    pub body: String,
    /// Email card label
    pub email_label: String,
    /// Email address
    pub email: String,
    /// Phone card label
    pub phone_label: String,
    /// Phone number
    pub phone: String,
    /// Booking button label
    pub button: String,
}

/// Footer block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterContent {
    /// Short company description
    pub tagline: String,
    /// Navigation column heading
    pub navigation_title: String,
    /// Contact column heading
    pub contact_title: String,
    /// Short address
    pub address: String,
    /// Legal links
    pub legal: Vec<NavLink>,
}

/// All copy shown on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    /// Brand identity
    pub brand: Brand,
    /// In-page navigation links
    pub nav_links: Vec<NavLink>,
    /// Call to action in the navbar
    pub nav_cta: NavLink,
    /// Hero block
    pub hero: HeroContent,
    /// Problem statement
    pub problem: ProblemContent,
    /// Solution
    pub solution: SolutionContent,
    /// Services
    pub services: ServicesContent,
    /// Strengths
    pub strengths: StrengthsContent,
    /// Achievements
    pub achievements: AchievementsContent,
    /// Representative profile
    pub representative: RepresentativeContent,
    /// Company facts
    pub company: CompanyContent,
    /// Contact
    pub contact: ContactContent,
    /// Footer
    pub footer: FooterContent,
    /// Copyright year
    pub year: i32,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

const LOGO_URL: &str = "https://lh3.googleusercontent.com/d/1yqIub1aBMMsKDQHG1iH5IjUAKKMCl-Fj";

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            brand: Brand {
                name: "iroha Seed".to_string(),
                byline: "by Hiroso Inc.".to_string(),
                company: "Hiroso Inc.".to_string(),
                logo_url: LOGO_URL.to_string(),
                logo_alt: "iroha Seed Logo".to_string(),
            },
            nav_links: vec![
                NavLink::new("サービス", "#services"),
                NavLink::new("強み", "#strengths"),
                NavLink::new("実績", "#achievements"),
                NavLink::new("会社概要", "#company"),
            ],
            nav_cta: NavLink::new("無料相談", "#contact"),
            hero: HeroContent {
                badge: "実戦型マーケティングパートナー".to_string(),
                headline_lead: "売れる仕組みを、".to_string(),
                headline_accent: "再設計".to_string(),
                headline_tail: "する。".to_string(),
                body: "机上の空論ではない、経営者視点の実戦型マーケティング支援。\
                       売上が積み上がる全体構造を、現場理解から組み直します。"
                    .to_string(),
                primary_cta: NavLink::new("無料で相談する", "#contact"),
                secondary_cta: NavLink::new("サービスを見る", "#services"),
                image_url: "https://images.unsplash.com/photo-1557804506-669a67965ba0?auto=format&fit=crop&q=80&w=1000".to_string(),
                image_alt: "戦略設計".to_string(),
                stat_label: "売上成長率".to_string(),
                stat_value: "+166%".to_string(),
            },
            problem: ProblemContent {
                heading: Heading::new("課題", "なぜ、施策を増やしても売上が伸びないのか？"),
                body: "売上が伸びない原因は、広告だけ、LPだけ、営業だけの問題ではありません。\
                       現場理解、訴求、導線、提案、改善が分断されていると、施策を増やしても成果は安定しません。"
                    .to_string(),
                problems: strings(&[
                    "広告や集客施策を行っているのに、売上の伸びにつながっていない",
                    "問い合わせや見込み客はいるのに、成約や継続につながらない",
                    "LP、営業、導線、商品設計がバラバラで、全体最適になっていない",
                    "表面的なアドバイスではなく、現場まで踏み込んだ実務支援がほしい",
                ]),
            },
            solution: SolutionContent {
                eyebrow: "解決策".to_string(),
                headline: strings(&["部分的な改善ではなく、", "売れる構造そのものを組み直す。"]),
                watermark: "RE-DESIGN".to_string(),
                body: "必要なのは、事業の現場を理解したうえで、集客・訴求・導線・成約・改善を\
                       一気通貫で繋ぎ直す「売れる仕組み再設計」です。"
                    .to_string(),
                pillars: vec![
                    Item::new("現場起点", "経営・営業・現場の実態を深く理解することから始めます。"),
                    Item::new("全体最適", "点ではなく線で捉え、売上につながる全体設計を見直します。"),
                    Item::new("実戦型伴走", "アドバイスで終わらず、実行と改善まで共に歩みます。"),
                ],
            },
            services: ServicesContent {
                heading: Heading::new("サービス", "売上を最大化させる、6つの支援領域"),
                services: vec![
                    Item::new(
                        "マーケティング戦略コンサルティング",
                        "集客から販売までの全体設計を整理し、売上につながる流れを現場レベルで整えます。",
                    ),
                    Item::new(
                        "セールスプロモーションツール制作",
                        "HP・LP・チラシ等を、見た目ではなく成果につながる訴求設計で制作・改善します。",
                    ),
                    Item::new(
                        "販売導線・既存導線の見直し",
                        "既存の販売戦略や導線の詰まりを見直し、成約につながる流れへ改善します。",
                    ),
                    Item::new(
                        "ビジネスマッチング",
                        "新しい販路、提携先、売上機会を生み出す接点をつくります。",
                    ),
                    Item::new(
                        "アライアンス調整",
                        "提携先との接続や協業設計を通じて、事業拡大のきっかけをつくります。",
                    ),
                    Item::new(
                        "イベント・セミナー企画運営",
                        "信頼関係ベースの接点をつくり、商談や紹介につながる場を設計します。",
                    ),
                ],
            },
            strengths: StrengthsContent {
                heading: Heading::new("強み", "なぜ、iroha Seedが選ばれるのか"),
                strengths: strings(&[
                    "実業の現場で結果を求められてきた当事者として、経営者と同じ目線で課題を捉えられる",
                    "建設・リフォームの現場経験があり、机上ではなく現場理解を前提に提案できる",
                    "戦略提案だけで終わらず、制作・導線設計・実行・改善まで一気通貫で支援できる",
                    "デジタル施策だけでなく、人脈・紹介・リアル接点まで含めて売上導線を設計できる",
                    "経営者の孤独や判断の重さを理解したうえで、表面的ではない打ち手を提示できる",
                ]),
                method_title: "メソッド".to_string(),
                methods: strings(&[
                    "圧倒的な当事者意識",
                    "アナログとデジタルの融合",
                    "現場起点",
                    "経営者視点",
                    "全体最適",
                    "伴走型支援",
                ]),
            },
            achievements: AchievementsContent {
                heading: Heading::new("実績", "確かな実績に裏打ちされた、実戦力"),
                case_label: "事例".to_string(),
                cases: vec![
                    CaseStudy {
                        title: "建設業 V字回復支援".to_string(),
                        result: "売上昨年対比166%達成".to_string(),
                        description: "事業承継時に参画し、組織改革と営業戦略を刷新。物件選定から採用、販促まで一貫して統括。".to_string(),
                    },
                    CaseStudy {
                        title: "FC店舗 垂直立ち上げ".to_string(),
                        result: "オープン初日 全国3位".to_string(),
                        description: "新規出店におけるマーケティング戦略を統括。圧倒的なスタートダッシュを実現。".to_string(),
                    },
                    CaseStudy {
                        title: "製薬会社 経営戦略参画".to_string(),
                        result: "社外取締役 CMO就任".to_string(),
                        description: "CEOから直接オファーを受け、最高マーケティング責任者として経営戦略の根幹から支援。".to_string(),
                    },
                ],
            },
            representative: RepresentativeContent {
                portrait_url: "https://lh3.googleusercontent.com/d/1MKnTG0HAYUdRxW0QUi8eeoU0Khy1zG2g".to_string(),
                portrait_alt: "代表取締役社長 山本剛史".to_string(),
                role: "Founder & CEO".to_string(),
                name: "山本 剛史".to_string(),
                name_latin: "TSUYOSHI YAMAMOTO".to_string(),
                eyebrow: "Representative Message".to_string(),
                quote_lead: "「マーケティングは、机の上ではなく".to_string(),
                quote_accent: "現場".to_string(),
                quote_tail: "で起きている」".to_string(),
                message: strings(&[
                    "世の中に“アドバイスだけ”で終わる支援が多い中、私は自ら事業の立ち上げから組織再生までを当事者として経験してきました。",
                    "だからこそ、表面的なノウハウではなく、経営者が本当に必要としている打ち手を、実務目線で一緒に組み立てたいと考えています。",
                    "経営者の孤独や判断の重さを理解したうえで、あなたの事業の「種」を共に育て、確かな売上へと繋げていく。それがiroha Seedの使命です。",
                ]),
                signature_caption: "iroha Seed Representative".to_string(),
                signature_name: "Tsuyoshi Yamamoto".to_string(),
            },
            company: CompanyContent {
                heading: Heading::new("会社概要", "企業情報"),
                facts: [
                    ("法人名", "株式会社廣創 (Hiroso Inc.)"),
                    ("設立", "2012年10月1日"),
                    ("事業ブランド", "iroha Seed (イロハシード)"),
                    ("代表者", "山本 剛史"),
                    ("本社所在地", "山口県"),
                    ("福岡拠点", "福岡県福岡市城南区七隈3-2-29-101"),
                    ("事業内容", "マーケティング戦略コンサルティング、プロモーション支援、事業開発"),
                ]
                .into_iter()
                .map(|(label, value)| Fact {
                    label: label.to_string(),
                    value: value.to_string(),
                })
                .collect(),
            },
            contact: ContactContent {
                headline: strings(&["あなたのビジネスに、", "新しい風を。"]),
                body: "まずは、現状の売上導線や集客の詰まりを整理するところからご相談ください。\
                       福岡市内・近郊は対面可、オンラインは全国対応可能です。"
                    .to_string(),
                email_label: "メール".to_string(),
                email: "iroha.seed.yamamoto@gmail.com".to_string(),
                phone_label: "電話".to_string(),
                phone: "090-8243-3923".to_string(),
                button: "無料相談を予約する".to_string(),
            },
            footer: FooterContent {
                tagline: "売上につながる全体構造を、現場理解から組み直す実戦型マーケティング支援。\
                          中小企業の成長に伴走し、確かな成果を創出します。"
                    .to_string(),
                navigation_title: "ナビゲーション".to_string(),
                contact_title: "連絡先".to_string(),
                address: "福岡県福岡市城南区七隈".to_string(),
                legal: vec![
                    NavLink::new("プライバシーポリシー", "#"),
                    NavLink::new("利用規約", "#"),
                ],
            },
            year: chrono::Local::now().year(),
        }
    }
}

impl SiteContent {
    /// Copyright line for the footer
    pub fn copyright(&self) -> String {
        format!("© {} {} All rights reserved.", self.year, self.brand.company)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_navigation() {
        let content = SiteContent::default();
        let hrefs: Vec<&str> = content.nav_links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, vec!["#services", "#strengths", "#achievements", "#company"]);
        assert_eq!(content.nav_cta, NavLink::new("無料相談", "#contact"));
    }

    #[test]
    fn test_default_collections() {
        let content = SiteContent::default();
        assert_eq!(content.problem.problems.len(), 4);
        assert_eq!(content.services.services.len(), 6);
        assert_eq!(content.strengths.strengths.len(), 5);
        assert_eq!(content.strengths.methods.len(), 6);
        assert_eq!(content.achievements.cases.len(), 3);
        assert_eq!(content.company.facts.len(), 7);
    }

    #[test]
    fn test_year_defaults_to_clock() {
        let content = SiteContent::default();
        assert!(content.year >= 2024);
    }

    #[test]
    fn test_copyright_uses_year() {
        let content = SiteContent {
            year: 2024,
            ..SiteContent::default()
        };
        assert_eq!(content.copyright(), "© 2024 Hiroso Inc. All rights reserved.");
    }

    #[test]
    fn test_partial_override() {
        let content: SiteContent = serde_json::from_str(r#"{"year": 2030}"#).unwrap();
        assert_eq!(content.year, 2030);
        assert_eq!(content.brand.name, "iroha Seed");
    }
}
