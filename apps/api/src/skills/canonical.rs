//! Display-name canonicalization for matched skill terms.

/// Words whose display form is not plain title case.
const SPECIAL_FORMS: &[(&str, &str)] = &[
    ("c++", "C++"),
    ("c#", "C#"),
    ("f#", "F#"),
    (".net", ".NET"),
    ("asp.net", "ASP.NET"),
    ("node.js", "Node.js"),
    ("react.js", "React.js"),
    ("express.js", "Express.js"),
    ("typescript", "TypeScript"),
    ("javascript", "JavaScript"),
    ("objective-c", "Objective-C"),
    ("php", "PHP"),
    ("vba", "VBA"),
    ("matlab", "MATLAB"),
    ("html", "HTML"),
    ("html5", "HTML5"),
    ("css", "CSS"),
    ("css3", "CSS3"),
    ("scss", "SCSS"),
    ("jquery", "jQuery"),
    ("material-ui", "Material-UI"),
    ("webgl", "WebGL"),
    ("fastapi", "FastAPI"),
    ("swiftui", "SwiftUI"),
    ("ios", "iOS"),
    ("sql", "SQL"),
    ("mysql", "MySQL"),
    ("postgresql", "PostgreSQL"),
    ("mariadb", "MariaDB"),
    ("sqlite", "SQLite"),
    ("db2", "DB2"),
    ("cockroachdb", "CockroachDB"),
    ("mongodb", "MongoDB"),
    ("dynamodb", "DynamoDB"),
    ("couchdb", "CouchDB"),
    ("arangodb", "ArangoDB"),
    ("rethinkdb", "RethinkDB"),
    ("hbase", "HBase"),
    ("graphql", "GraphQL"),
    ("typeorm", "TypeORM"),
    ("aws", "AWS"),
    ("gcp", "GCP"),
    ("ci", "CI"),
    ("cd", "CD"),
    ("ci/cd", "CI/CD"),
    ("circleci", "CircleCI"),
    ("elk", "ELK"),
    ("iis", "IIS"),
    ("github", "GitHub"),
    ("gitlab", "GitLab"),
    ("svn", "SVN"),
    ("xd", "XD"),
    ("api", "API"),
    ("ui", "UI"),
    ("ux", "UX"),
    ("ai", "AI"),
    ("ml", "ML"),
    ("bi", "BI"),
    ("numpy", "NumPy"),
    ("pytorch", "PyTorch"),
    ("tensorflow", "TensorFlow"),
    ("opencv", "OpenCV"),
    ("nltk", "NLTK"),
    ("spacy", "spaCy"),
    ("devsecops", "DevSecOps"),
    ("siem", "SIEM"),
    ("soc", "SOC"),
    ("vpn", "VPN"),
    ("ids", "IDS"),
    ("ips", "IPS"),
    ("owasp", "OWASP"),
    ("zap", "ZAP"),
    ("ssl", "SSL"),
    ("tls", "TLS"),
    ("pki", "PKI"),
    ("iam", "IAM"),
    ("saml", "SAML"),
    ("oauth", "OAuth"),
    ("openid", "OpenID"),
    ("junit", "JUnit"),
    ("testng", "TestNG"),
    ("soapui", "SoapUI"),
    ("jmeter", "JMeter"),
    ("cad", "CAD"),
    ("autocad", "AutoCAD"),
    ("solidworks", "SolidWorks"),
    ("catia", "CATIA"),
    ("nx", "NX"),
    ("fea", "FEA"),
    ("ansys", "ANSYS"),
    ("comsol", "COMSOL"),
    ("cfd", "CFD"),
    ("openfoam", "OpenFOAM"),
    ("gd&t", "GD&T"),
    ("cnc", "CNC"),
    ("3d", "3D"),
    ("plc", "PLC"),
    ("staad", "STAAD"),
    ("etabs", "ETABS"),
    ("sap2000", "SAP2000"),
    ("bim", "BIM"),
    ("arcgis", "ArcGIS"),
    ("qgis", "QGIS"),
    ("microstation", "MicroStation"),
    ("pcb", "PCB"),
    ("kicad", "KiCad"),
    ("orcad", "OrCAD"),
    ("labview", "LabVIEW"),
    ("esp32", "ESP32"),
    ("stm32", "STM32"),
    ("pic", "PIC"),
    ("avr", "AVR"),
    ("fpga", "FPGA"),
    ("vhdl", "VHDL"),
    ("dsp", "DSP"),
    ("vlsi", "VLSI"),
    ("asic", "ASIC"),
    ("iot", "IoT"),
    ("pmp", "PMP"),
    ("prince2", "PRINCE2"),
    ("seo", "SEO"),
    ("sem", "SEM"),
    ("crm", "CRM"),
    ("erp", "ERP"),
    ("sap", "SAP"),
    ("3ds", "3ds"),
    ("zbrush", "ZBrush"),
    ("davinci", "DaVinci"),
    ("indesign", "InDesign"),
    ("ehr", "EHR"),
    ("hipaa", "HIPAA"),
    ("icd-10", "ICD-10"),
    ("cpt", "CPT"),
    ("fda", "FDA"),
    ("edtech", "EdTech"),
    ("lms", "LMS"),
    ("dbt", "dbt"),
];

/// Maps a lowercase taxonomy term to its display name: known acronym and
/// symbol forms come from a lookup table, every other word is title-cased.
pub fn display_name(term: &str) -> String {
    term.split(' ')
        .filter(|word| !word.is_empty())
        .map(canonical_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Display form for a free-form token harvested from a skills section.
/// Tokens the author already capitalized keep their casing ("gRPC", "OpenAPI").
pub fn display_token(token: &str) -> String {
    if token.chars().any(|c| c.is_uppercase()) {
        token.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        display_name(&token.split_whitespace().collect::<Vec<_>>().join(" "))
    }
}

fn canonical_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if let Some((_, display)) = SPECIAL_FORMS.iter().find(|(raw, _)| *raw == lower) {
        return (*display).to_string();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_forms() {
        assert_eq!(display_name("c++"), "C++");
        assert_eq!(display_name("node.js"), "Node.js");
        assert_eq!(display_name("ui"), "UI");
        assert_eq!(display_name("aws"), "AWS");
        assert_eq!(display_name("ci/cd"), "CI/CD");
    }

    #[test]
    fn test_multi_word_terms_mix_special_and_title_case() {
        assert_eq!(display_name("tailwind css"), "Tailwind CSS");
        assert_eq!(display_name("power bi"), "Power BI");
        assert_eq!(display_name("machine learning"), "Machine Learning");
        assert_eq!(display_name("ui design"), "UI Design");
    }

    #[test]
    fn test_plain_words_are_title_cased() {
        assert_eq!(display_name("python"), "Python");
        assert_eq!(display_name("next.js"), "Next.js");
        assert_eq!(display_name("scikit-learn"), "Scikit-learn");
    }

    #[test]
    fn test_display_token_keeps_author_casing() {
        assert_eq!(display_token("gRPC"), "gRPC");
        assert_eq!(display_token("kafka   streams"), "Kafka Streams");
        assert_eq!(display_token("sql"), "SQL");
    }
}
