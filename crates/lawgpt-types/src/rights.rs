//! Static catalogue of the Fundamental Rights of India.
//!
//! Part III of the Constitution of India (Articles 12-35). Read-only data;
//! nothing in the client mutates it.

use serde::Serialize;

/// A single constitutional provision within a right.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Provision {
    pub title: &'static str,
    pub content: &'static str,
}

/// One of the six groups of Fundamental Rights.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FundamentalRight {
    pub title: &'static str,
    /// Article range as printed, e.g. "Articles 14-18".
    pub articles: &'static str,
    pub description: &'static str,
    pub provisions: &'static [Provision],
    pub exceptions: &'static str,
    pub landmark: &'static str,
}

impl FundamentalRight {
    /// Inclusive range of article numbers covered by this entry.
    pub fn article_range(&self) -> Option<(u32, u32)> {
        let digits = self.articles.trim_start_matches(|c: char| !c.is_ascii_digit());
        match digits.split_once('-') {
            Some((start, end)) => Some((start.trim().parse().ok()?, end.trim().parse().ok()?)),
            None => {
                let single = digits.trim().parse().ok()?;
                Some((single, single))
            }
        }
    }

    pub fn covers_article(&self, article: u32) -> bool {
        self.article_range()
            .is_some_and(|(start, end)| (start..=end).contains(&article))
    }
}

/// A general principle governing how Fundamental Rights operate.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LegalPrinciple {
    pub title: &'static str,
    pub summary: &'static str,
}

pub const CATALOGUE_TITLE: &str = "Fundamental Rights of India";

pub const CATALOGUE_SUBTITLE: &str =
    "Enshrined in Part III of the Constitution of India (Articles 12-35)";

pub const CATALOGUE_INTRO: &str = "Fundamental Rights are the basic human rights guaranteed to all citizens of India. \
They are justiciable, meaning they can be enforced through courts of law. \
These rights are essential for the overall development of individuals and the nation.";

pub static FUNDAMENTAL_RIGHTS: &[FundamentalRight] = &[
    FundamentalRight {
        title: "Right to Equality",
        articles: "Articles 14-18",
        description: "Equality before law, prohibition of discrimination, equality of opportunity in public employment, abolition of untouchability, and abolition of titles.",
        provisions: &[
            Provision {
                title: "Equality before Law (Article 14)",
                content: "The State shall not deny to any person equality before the law or the equal protection of the laws within the territory of India. This fundamental right ensures that all persons shall be equally protected by the laws of the country.",
            },
            Provision {
                title: "Prohibition of Discrimination (Article 15)",
                content: "No discrimination on grounds of religion, race, caste, sex, or place of birth. No citizen shall be subject to any disability, liability, restriction, or condition with regard to access to public places.",
            },
            Provision {
                title: "Equality in Public Employment (Article 16)",
                content: "There shall be equality of opportunity for all citizens in matters relating to employment or appointment to any office under the State. No citizen shall be discriminated against on grounds of religion, race, caste, sex, descent, place of birth, or residence.",
            },
            Provision {
                title: "Abolition of Untouchability (Article 17)",
                content: "Untouchability is abolished and its practice in any form is forbidden. The enforcement of any disability arising out of untouchability shall be an offence punishable in accordance with law.",
            },
            Provision {
                title: "Abolition of Titles (Article 18)",
                content: "No title, not being a military or academic distinction, shall be conferred by the State. No citizen of India shall accept any title from any foreign State.",
            },
        ],
        exceptions: "The State may make special provisions for women, children, socially and educationally backward classes, SCs and STs.",
        landmark: "Kesavananda Bharati v. State of Kerala (1973) - Established the basic structure doctrine",
    },
    FundamentalRight {
        title: "Right to Freedom",
        articles: "Articles 19-22",
        description: "Six freedoms guaranteed to all citizens of India, subject to reasonable restrictions in the interest of sovereignty, integrity, security, public order, decency, or morality.",
        provisions: &[
            Provision {
                title: "Six Freedoms (Article 19)",
                content: "(a) Freedom of speech and expression; (b) Freedom to assemble peacefully and without arms; (c) Freedom to form associations or unions; (d) Freedom to move freely throughout the territory of India; (e) Freedom to reside and settle in any part of India; (f) Freedom to practice any profession, or to carry on any occupation, trade, or business.",
            },
            Provision {
                title: "Protection in Respect of Conviction (Article 20)",
                content: "No person shall be convicted of any offence except for violation of a law in force at the time of the commission of the act. No person shall be prosecuted and punished for the same offence more than once. No person accused of any offence shall be compelled to be a witness against himself.",
            },
            Provision {
                title: "Protection of Life and Personal Liberty (Article 21)",
                content: "No person shall be deprived of his life or personal liberty except according to procedure established by law. This includes right to privacy, right to livelihood, right to clean environment, right to education, right to speedy trial, and many more rights read into it by the judiciary.",
            },
            Provision {
                title: "Protection Against Arrest and Detention (Article 22)",
                content: "Every person who is arrested shall be informed of the grounds of arrest and shall be entitled to consult and be defended by a legal practitioner of his choice. Every person arrested shall be produced before the nearest magistrate within 24 hours.",
            },
        ],
        exceptions: "Reasonable restrictions can be imposed on these freedoms in the interests of sovereignty, integrity, security of State, friendly relations with foreign States, public order, decency or morality, or in relation to contempt of court, defamation, or incitement to an offence.",
        landmark: "Maneka Gandhi v. Union of India (1978) - Expanded the scope of Article 21",
    },
    FundamentalRight {
        title: "Right Against Exploitation",
        articles: "Articles 23-24",
        description: "Protection against forced labor, human trafficking, and exploitation of children in hazardous employment.",
        provisions: &[
            Provision {
                title: "Prohibition of Traffic in Human Beings (Article 23)",
                content: "Traffic in human beings, begar (forced labor), and other similar forms of forced labor are prohibited, and any contravention of this provision shall be an offence punishable in accordance with law. This right protects individuals from all forms of forced labor and human trafficking.",
            },
            Provision {
                title: "Prohibition of Child Labor (Article 24)",
                content: "No child below the age of fourteen years shall be employed to work in any factory, mine, or engaged in any other hazardous employment. The State must ensure proper development and protection of children against exploitation.",
            },
        ],
        exceptions: "The State can impose compulsory service for public purposes, and in imposing such service the State shall not make any discrimination on grounds only of religion, race, caste or class.",
        landmark: "People's Union for Democratic Rights v. Union of India (1982) - Bonded labor case",
    },
    FundamentalRight {
        title: "Right to Freedom of Religion",
        articles: "Articles 25-28",
        description: "Freedom of conscience, free profession, practice and propagation of religion, subject to public order, morality, and health.",
        provisions: &[
            Provision {
                title: "Freedom of Conscience (Article 25)",
                content: "All persons are equally entitled to freedom of conscience and the right freely to profess, practice, and propagate religion subject to public order, morality and health. This includes the right to manage religious affairs and own property for religious purposes.",
            },
            Provision {
                title: "Freedom to Manage Religious Affairs (Article 26)",
                content: "Every religious denomination or any section thereof shall have the right to establish and maintain institutions for religious and charitable purposes, to manage its own affairs in matters of religion, to own and acquire movable and immovable property, and to administer such property in accordance with law.",
            },
            Provision {
                title: "Freedom from Payment of Taxes (Article 27)",
                content: "No person shall be compelled to pay any taxes, the proceeds of which are specifically appropriated in payment of expenses for the promotion or maintenance of any particular religion or religious denomination.",
            },
            Provision {
                title: "Freedom from Religious Instruction (Article 28)",
                content: "No religious instruction shall be provided in any educational institution wholly maintained out of State funds. No person attending any educational institution shall be required to take part in any religious instruction or worship without consent.",
            },
        ],
        exceptions: "Subject to public order, morality, and health. The State can regulate or restrict economic, financial, political or other secular activities associated with religious practice.",
        landmark: "S.R. Bommai v. Union of India (1994) - Secularism is a basic feature of the Constitution",
    },
    FundamentalRight {
        title: "Cultural and Educational Rights",
        articles: "Articles 29-30",
        description: "Protection of interests of minorities and their right to establish and administer educational institutions of their choice.",
        provisions: &[
            Provision {
                title: "Protection of Language, Script and Culture (Article 29)",
                content: "Any section of citizens residing in any part of India having a distinct language, script or culture of its own shall have the right to conserve the same. No citizen shall be denied admission into any educational institution maintained or aided by the State on grounds only of religion, race, caste, language, or any of them.",
            },
            Provision {
                title: "Right to Establish Educational Institutions (Article 30)",
                content: "All minorities, whether based on religion or language, shall have the right to establish and administer educational institutions of their choice. The State shall not, in granting aid to educational institutions, discriminate against any institution on the ground that it is under the management of a minority.",
            },
        ],
        exceptions: "The State may regulate educational standards and conditions of service of teachers in aided institutions.",
        landmark: "T.M.A. Pai Foundation v. State of Karnataka (2002) - Rights of minority institutions",
    },
    FundamentalRight {
        title: "Right to Constitutional Remedies",
        articles: "Article 32",
        description: "The right to move the Supreme Court for enforcement of Fundamental Rights - described as the 'heart and soul' of the Constitution by Dr. B.R. Ambedkar.",
        provisions: &[
            Provision {
                title: "Supreme Court Powers (Article 32)",
                content: "The Supreme Court shall have power to issue directions or orders or writs including writs in the nature of habeas corpus, mandamus, prohibition, quo warranto and certiorari, whichever may be appropriate, for the enforcement of any of the rights conferred by this Part.",
            },
            Provision {
                title: "Five Types of Writs",
                content: "1. Habeas Corpus: To produce a person before the court; 2. Mandamus: Command to perform public duty; 3. Prohibition: To prevent inferior court from exceeding jurisdiction; 4. Quo Warranto: To inquire into the legality of claim to public office; 5. Certiorari: To quash the order of an inferior court or tribunal.",
            },
            Provision {
                title: "Guaranteed Right",
                content: "The right guaranteed by this article shall not be suspended except as otherwise provided by the Constitution. This makes it a fundamental right in itself and ensures citizens can directly approach the Supreme Court.",
            },
        ],
        exceptions: "This right cannot be suspended except during a proclamation of Emergency under Article 359.",
        landmark: "Minerva Mills v. Union of India (1980) - Article 32 is a basic feature of the Constitution",
    },
];

pub static LEGAL_PRINCIPLES: &[LegalPrinciple] = &[
    LegalPrinciple {
        title: "Justiciability",
        summary: "Fundamental Rights are justiciable - citizens can approach courts if these rights are violated.",
    },
    LegalPrinciple {
        title: "Supremacy",
        summary: "Any law inconsistent with Fundamental Rights is void to the extent of such inconsistency (Article 13).",
    },
    LegalPrinciple {
        title: "Reasonable Restrictions",
        summary: "Rights are not absolute and can be subject to reasonable restrictions for public interest.",
    },
    LegalPrinciple {
        title: "Amendability",
        summary: "Parliament can amend Fundamental Rights but cannot alter the basic structure of the Constitution.",
    },
];

/// Find a right by article number ("21", "Article 21") or by a
/// case-insensitive fragment of its title ("equality").
pub fn find_right(query: &str) -> Option<&'static FundamentalRight> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    let number = query
        .trim_start_matches(|c: char| !c.is_ascii_digit())
        .parse::<u32>()
        .ok();
    if let Some(article) = number {
        return FUNDAMENTAL_RIGHTS.iter().find(|r| r.covers_article(article));
    }

    let needle = query.to_lowercase();
    FUNDAMENTAL_RIGHTS
        .iter()
        .find(|r| r.title.to_lowercase().contains(&needle))
}
