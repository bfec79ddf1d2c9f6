//! Static skills taxonomy: category → skill definitions.
//!
//! Terms are lowercase. Display names come from `canonical::display_name(term)`.
//! A definition with `context` phrases is only accepted when one of them
//! corroborates the match (short or ambiguous tokens such as "R", "C", "Go").

use crate::skills::Category;

/// A single skill definition.
#[derive(Debug, Clone, Copy)]
pub struct SkillDef {
    /// Canonical term; also the primary detection pattern.
    pub term: &'static str,
    /// Additional detection patterns that map to the same skill.
    pub aliases: &'static [&'static str],
    /// Disambiguating phrases; empty means no corroboration is required.
    pub context: &'static [&'static str],
}

impl SkillDef {
    pub fn patterns(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.term).chain(self.aliases.iter().copied())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub category: Category,
    pub skills: &'static [SkillDef],
}

const fn term(term: &'static str) -> SkillDef {
    SkillDef {
        term,
        aliases: &[],
        context: &[],
    }
}

const fn aliased(term: &'static str, aliases: &'static [&'static str]) -> SkillDef {
    SkillDef {
        term,
        aliases,
        context: &[],
    }
}

const fn contextual(
    term: &'static str,
    aliases: &'static [&'static str],
    context: &'static [&'static str],
) -> SkillDef {
    SkillDef {
        term,
        aliases,
        context,
    }
}

pub static TAXONOMY: &[CategoryDef] = &[
    CategoryDef {
        category: Category::ProgrammingLanguages,
        skills: &[
            term("c++"),
            term("c#"),
            contextual(
                "c",
                &["c language", "c programming"],
                &["c programming", "c language", "ansi c", "embedded c"],
            ),
            term("java"),
            term("python"),
            term("javascript"),
            term("typescript"),
            term("ruby"),
            term("php"),
            contextual(
                "go",
                &["golang"],
                &["golang", "go programming", "go language", "go developer", "go engineer"],
            ),
            term("rust"),
            term("swift"),
            term("kotlin"),
            term("scala"),
            term("perl"),
            contextual(
                "r",
                &["r programming", "r language"],
                &["r programming", "r language", "r studio", "rstudio"],
            ),
            term("matlab"),
            term("objective-c"),
            term("dart"),
            term("lua"),
            term("haskell"),
            term("erlang"),
            term("elixir"),
            term("clojure"),
            term("f#"),
            term("visual basic"),
            term("vba"),
            term("assembly"),
            term("fortran"),
            term("cobol"),
            term("pascal"),
            contextual("ada", &[], &["ada programming", "ada language", "spark ada"]),
            term("bash"),
            term("shell scripting"),
            term("powershell"),
        ],
    },
    CategoryDef {
        category: Category::WebDevelopment,
        skills: &[
            aliased("html", &["html5"]),
            aliased("css", &["css3"]),
            term("sass"),
            term("scss"),
            contextual("less", &[], &["less css", "less.js", "sass", "scss", "css preprocessor"]),
            term("stylus"),
            aliased("react", &["react.js", "reactjs"]),
            aliased("angular", &["angular.js", "angularjs"]),
            aliased("vue", &["vue.js", "vuejs"]),
            term("next.js"),
            term("nuxt.js"),
            term("svelte"),
            term("sveltekit"),
            term("ember.js"),
            term("backbone.js"),
            term("jquery"),
            term("bootstrap"),
            term("tailwind css"),
            term("material-ui"),
            term("ant design"),
            term("chakra ui"),
            term("webpack"),
            term("vite"),
            term("parcel"),
            term("rollup"),
            term("gulp"),
            term("grunt"),
            term("babel"),
            term("webgl"),
            term("three.js"),
            term("d3.js"),
            term("chart.js"),
        ],
    },
    CategoryDef {
        category: Category::BackendDevelopment,
        skills: &[
            aliased("node.js", &["nodejs"]),
            term("express.js"),
            term("nest.js"),
            term("django"),
            term("flask"),
            term("fastapi"),
            term("spring"),
            term("spring boot"),
            term("laravel"),
            term("symfony"),
            term("ruby on rails"),
            term("asp.net"),
            term(".net core"),
            term("play framework"),
            term("phoenix"),
            contextual("gin", &[], &["gin framework", "gin-gonic", "golang"]),
            contextual("echo", &[], &["echo framework", "labstack", "golang"]),
            term("koa"),
            term("hapi"),
            term("sails.js"),
        ],
    },
    CategoryDef {
        category: Category::MobileDevelopment,
        skills: &[
            term("react native"),
            term("flutter"),
            term("ionic"),
            term("xamarin"),
            term("cordova"),
            term("phonegap"),
            term("android studio"),
            term("xcode"),
            term("swiftui"),
            term("jetpack compose"),
            term("kotlin multiplatform"),
        ],
    },
    CategoryDef {
        category: Category::Databases,
        skills: &[
            term("sql"),
            term("mysql"),
            aliased("postgresql", &["postgres"]),
            term("mariadb"),
            term("oracle database"),
            term("sql server"),
            term("sqlite"),
            term("db2"),
            term("cassandra"),
            term("cockroachdb"),
            term("mongodb"),
            term("redis"),
            term("elasticsearch"),
            term("dynamodb"),
            term("firebase"),
            term("couchdb"),
            term("neo4j"),
            term("arangodb"),
            term("rethinkdb"),
            term("hbase"),
            term("couchbase"),
            term("graphql"),
            term("apollo"),
            term("prisma"),
            term("sequelize"),
            term("typeorm"),
            term("mongoose"),
        ],
    },
    CategoryDef {
        category: Category::CloudDevOps,
        skills: &[
            aliased("aws", &["amazon web services"]),
            aliased("azure", &["microsoft azure"]),
            aliased("gcp", &["google cloud", "google cloud platform"]),
            term("docker"),
            aliased("kubernetes", &["k8s"]),
            term("jenkins"),
            term("gitlab ci"),
            term("github actions"),
            term("circleci"),
            term("travis ci"),
            term("ansible"),
            term("terraform"),
            term("puppet"),
            term("chef"),
            term("prometheus"),
            term("grafana"),
            term("elk stack"),
            term("splunk"),
            term("new relic"),
            term("datadog"),
            term("nginx"),
            term("apache"),
            term("iis"),
            term("linux"),
            term("unix"),
            term("centos"),
            term("ubuntu"),
            term("debian"),
            term("red hat"),
            term("fedora"),
            term("windows server"),
            term("ci/cd"),
            contextual(
                "ci",
                &["continuous integration"],
                &["continuous integration", "ci/cd", "ci pipeline", "ci pipelines"],
            ),
            contextual(
                "cd",
                &["continuous deployment", "continuous delivery"],
                &["continuous deployment", "continuous delivery", "ci/cd"],
            ),
        ],
    },
    CategoryDef {
        category: Category::SoftwareTools,
        skills: &[
            term("git"),
            term("github"),
            term("gitlab"),
            term("bitbucket"),
            term("svn"),
            term("mercurial"),
            term("jira"),
            term("confluence"),
            term("trello"),
            term("asana"),
            term("notion"),
            term("slack"),
            term("microsoft teams"),
            term("zoom"),
            term("postman"),
            term("insomnia"),
            term("swagger"),
            term("figma"),
            term("adobe xd"),
            term("sketch"),
            term("invision"),
            term("zeplin"),
        ],
    },
    CategoryDef {
        category: Category::DataScienceAi,
        skills: &[
            term("data analysis"),
            term("data visualization"),
            term("machine learning"),
            term("deep learning"),
            term("artificial intelligence"),
            contextual(
                "ai",
                &[],
                &["artificial intelligence", "ai/ml", "ai models", "machine learning", "generative ai"],
            ),
            term("computer vision"),
            term("natural language processing"),
            term("numpy"),
            term("pandas"),
            term("scikit-learn"),
            term("tensorflow"),
            term("pytorch"),
            term("keras"),
            term("opencv"),
            term("nltk"),
            term("spacy"),
            term("hugging face"),
            term("apache spark"),
            term("hadoop"),
            term("tableau"),
            term("power bi"),
            term("looker"),
            term("qlik"),
            term("matplotlib"),
            term("seaborn"),
            term("plotly"),
            term("jupyter"),
            term("colab"),
            term("apache kafka"),
            term("airflow"),
            term("dbt"),
        ],
    },
    CategoryDef {
        category: Category::Cybersecurity,
        skills: &[
            term("network security"),
            term("application security"),
            term("cloud security"),
            term("devsecops"),
            term("penetration testing"),
            term("ethical hacking"),
            term("vulnerability assessment"),
            term("siem"),
            term("soc"),
            term("firewall"),
            term("vpn"),
            term("ids"),
            term("ips"),
            term("owasp"),
            term("cryptography"),
            term("ssl"),
            term("tls"),
            term("pki"),
            term("iam"),
            term("saml"),
            term("oauth"),
            term("openid connect"),
        ],
    },
    CategoryDef {
        category: Category::QaTesting,
        skills: &[
            term("manual testing"),
            term("automated testing"),
            term("selenium"),
            term("cypress"),
            term("jest"),
            term("mocha"),
            term("chai"),
            term("jasmine"),
            term("pytest"),
            term("junit"),
            term("testng"),
            term("postman testing"),
            term("soapui"),
            term("load testing"),
            term("performance testing"),
            term("jmeter"),
            term("gatling"),
            term("security testing"),
            term("owasp zap"),
            term("burp suite"),
        ],
    },
    CategoryDef {
        category: Category::MechanicalEngineering,
        skills: &[
            aliased("cad", &["computer-aided design"]),
            term("solidworks"),
            term("autocad"),
            term("catia"),
            contextual("inventor", &["autodesk inventor"], &["autodesk inventor", "cad", "solidworks"]),
            term("creo"),
            contextual("nx", &["siemens nx"], &["siemens nx", "nx cad", "unigraphics"]),
            term("fusion 360"),
            term("solid edge"),
            aliased("finite element analysis", &["fea"]),
            term("ansys"),
            term("abaqus"),
            term("comsol"),
            aliased("computational fluid dynamics", &["cfd"]),
            contextual("fluent", &["ansys fluent"], &["ansys fluent", "cfd", "computational fluid dynamics"]),
            term("openfoam"),
            term("thermodynamics"),
            term("heat transfer"),
            term("fluid mechanics"),
            term("hydraulics"),
            term("pneumatics"),
            term("mechanical design"),
            term("machine design"),
            term("drafting"),
            aliased("gd&t", &["geometric dimensioning and tolerancing"]),
            term("materials science"),
            term("metallurgy"),
            term("composite materials"),
            term("manufacturing"),
            term("cnc"),
            term("machining"),
            term("turning"),
            term("milling"),
            term("3d printing"),
            term("additive manufacturing"),
            term("welding"),
            term("sheet metal"),
            term("injection molding"),
            term("robotics"),
            term("automation"),
            aliased("plc", &["programmable logic controller"]),
            term("mechatronics"),
            term("industrial engineering"),
            term("quality control"),
            term("six sigma"),
        ],
    },
    CategoryDef {
        category: Category::CivilEngineering,
        skills: &[
            term("structural analysis"),
            term("structural design"),
            term("staad pro"),
            term("etabs"),
            term("sap2000"),
            aliased("civil 3d", &["autodesk civil 3d"]),
            term("revit"),
            aliased("bim", &["building information modeling"]),
            term("surveying"),
            term("geotechnical engineering"),
            term("soil mechanics"),
            term("foundation design"),
            term("concrete design"),
            term("steel design"),
            term("bridge design"),
            term("highway design"),
            term("traffic engineering"),
            term("water resources"),
            term("environmental engineering"),
            term("construction management"),
            term("project management"),
            term("microstation"),
            term("arcgis"),
            term("qgis"),
        ],
    },
    CategoryDef {
        category: Category::ElectricalEngineering,
        skills: &[
            term("circuit design"),
            term("pcb design"),
            term("altium"),
            term("kicad"),
            term("eagle"),
            term("orcad"),
            term("proteus"),
            term("matlab simulink"),
            term("labview"),
            term("embedded systems"),
            term("microcontroller"),
            term("arduino"),
            term("raspberry pi"),
            term("esp32"),
            term("stm32"),
            contextual("pic", &[], &["microcontroller", "microcontrollers", "embedded", "pic16", "pic18", "microchip"]),
            contextual("avr", &[], &["microcontroller", "microcontrollers", "embedded", "atmel", "atmega"]),
            term("fpga"),
            term("verilog"),
            term("vhdl"),
            term("power systems"),
            term("electrical machines"),
            term("control systems"),
            aliased("digital signal processing", &["dsp"]),
            term("vlsi"),
            term("asic design"),
            aliased("iot", &["internet of things"]),
            term("sensors"),
            term("actuators"),
        ],
    },
    CategoryDef {
        category: Category::BusinessManagement,
        skills: &[
            term("project management"),
            term("agile"),
            term("scrum"),
            term("kanban"),
            term("waterfall"),
            term("lean"),
            term("six sigma"),
            term("pmp"),
            term("prince2"),
            term("product management"),
            term("business analysis"),
            term("stakeholder management"),
            term("risk management"),
            term("financial analysis"),
            term("budgeting"),
            term("forecasting"),
            term("strategic planning"),
            term("market research"),
            term("digital marketing"),
            term("seo"),
            term("sem"),
            term("social media marketing"),
            term("content marketing"),
            term("email marketing"),
            term("analytics"),
            term("google analytics"),
            term("salesforce"),
            aliased("crm", &["customer relationship management"]),
            term("erp"),
            term("sap"),
            term("supply chain management"),
            term("logistics"),
            term("operations management"),
        ],
    },
    CategoryDef {
        category: Category::DesignCreative,
        skills: &[
            term("ui design"),
            term("ux design"),
            term("user experience"),
            term("user interface"),
            contextual("ui", &[], &["user interface", "ui design", "ui/ux"]),
            contextual("ux", &[], &["user experience", "ui/ux", "ux design"]),
            term("graphic design"),
            aliased("adobe photoshop", &["photoshop"]),
            term("illustrator"),
            term("indesign"),
            term("after effects"),
            term("premiere pro"),
            term("final cut pro"),
            term("davinci resolve"),
            term("motion graphics"),
            term("3d modeling"),
            term("blender"),
            term("maya"),
            term("3ds max"),
            term("zbrush"),
            term("substance painter"),
            contextual("unity", &["unity3d"], &["unity3d", "unity engine", "game development", "c#"]),
            term("unreal engine"),
            term("game development"),
            term("animation"),
            term("character design"),
            term("illustration"),
        ],
    },
    CategoryDef {
        category: Category::HealthcareMedical,
        skills: &[
            term("medical terminology"),
            term("clinical research"),
            term("health informatics"),
            aliased("electronic health records", &["ehr"]),
            term("hipaa"),
            term("medical coding"),
            term("icd-10"),
            term("cpt"),
            term("pharmaceutical"),
            term("biotechnology"),
            term("laboratory techniques"),
            term("patient care"),
            term("nursing"),
            term("medical devices"),
            term("fda regulations"),
            term("clinical trials"),
            aliased("good clinical practice", &["gcp"]),
        ],
    },
    CategoryDef {
        category: Category::EducationAcademia,
        skills: &[
            term("teaching"),
            term("curriculum development"),
            term("lesson planning"),
            aliased("educational technology", &["edtech"]),
            aliased("lms", &["learning management system"]),
            term("moodle"),
            term("blackboard"),
            contextual("canvas", &["canvas lms"], &["canvas lms", "instructure", "lms", "learning management"]),
            term("instructional design"),
            term("academic research"),
            term("publication"),
            term("peer review"),
            term("grant writing"),
            term("scientific writing"),
            term("laboratory skills"),
            term("experimental design"),
        ],
    },
    CategoryDef {
        category: Category::GeneralSkills,
        skills: &[
            term("communication"),
            term("teamwork"),
            term("leadership"),
            aliased("problem solving", &["problem-solving"]),
            term("critical thinking"),
            term("analytical skills"),
            term("creativity"),
            term("adaptability"),
            term("time management"),
            term("organization"),
            term("attention to detail"),
            term("presentation"),
            term("public speaking"),
            term("writing"),
            term("technical writing"),
            term("customer service"),
            term("negotiation"),
            term("decision making"),
        ],
    },
];
