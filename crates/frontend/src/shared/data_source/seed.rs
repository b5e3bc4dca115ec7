//! Демо-данные mock-источника

use contracts::domain::common::{LookupKind, LookupOption};
use serde_json::{json, Value};

pub const SEED_AUTHOR: &str = "Admin";

const COUNTRIES: &[(&str, &str)] = &[
    ("VN", "Việt Nam"),
    ("SG", "Singapore"),
    ("TH", "Thái Lan"),
    ("CN", "Trung Quốc"),
    ("JP", "Nhật Bản"),
    ("KR", "Hàn Quốc"),
    ("HK", "Hồng Kông"),
    ("MY", "Malaysia"),
    ("US", "Hoa Kỳ"),
    ("DE", "Đức"),
];

const TYPE_PORTS: &[(&str, &str)] = &[
    ("sea", "Cảng biển"),
    ("air", "Cảng hàng không"),
    ("icd", "Cảng cạn (ICD)"),
    ("river", "Cảng sông"),
];

const PARTNER_TYPES: &[(&str, &str)] = &[("Customer", "Customer"), ("Supplier", "Supplier")];

const ZONES: &[(&str, &str)] = &[
    ("Châu Á", "Châu Á"),
    ("Châu Âu", "Châu Âu"),
    ("Châu Mỹ", "Châu Mỹ"),
];

pub fn lookup_options(kind: LookupKind) -> Vec<LookupOption> {
    let pairs = match kind {
        LookupKind::Countries => COUNTRIES,
        LookupKind::TypePorts => TYPE_PORTS,
        LookupKind::PartnerTypes => PARTNER_TYPES,
        LookupKind::Zones => ZONES,
    };
    pairs
        .iter()
        .map(|(value, label)| LookupOption::new(*value, *label))
        .collect()
}

pub fn partners() -> Vec<Value> {
    (0..46)
        .map(|i| {
            let odd = i % 2 == 1;
            json!({
                "key": (i + 1).to_string(),
                "partnerCode": "ASLS152",
                "abbreviation": "Dong A",
                "partnerName": "Đông Á",
                "typeOfPartner": if odd { "Customer" } else { "Supplier" },
                "phone": "0964582355",
                "zone": "Châu Á",
                "country": "Việt Nam",
                "countryID": "VN",
                "address": "Hồ Chí Minh",
                "email": "abcd@gmail.com",
                "saleman": "Nguyễn Văn A",
                "status": if odd { "Active" } else { "DeActive" },
                "potentialAnalysis": if odd { "Customer (on sale)" } else { "Potential Customer" },
                "dateCreated": "14/06/2023",
                "dateUpdate": "14/06/2023",
                "updater": SEED_AUTHOR,
                "creator": SEED_AUTHOR,
            })
        })
        .collect()
}

pub fn ports() -> Vec<Value> {
    let rows: &[(&str, &str, &str, &[&str], &str, &str, i32)] = &[
        ("VNCLI", "Cát Lái", "VN", &["sea"], "Quận 2, Hồ Chí Minh", "Tân Cảng Sài Gòn", 1),
        ("VNHPH", "Hải Phòng", "VN", &["sea", "river"], "Ngô Quyền, Hải Phòng", "Cảng Hải Phòng", 1),
        ("VNDAD", "Tiên Sa", "VN", &["sea"], "Sơn Trà, Đà Nẵng", "Cảng Đà Nẵng", 1),
        ("VNSGN", "Tân Sơn Nhất", "VN", &["air"], "Tân Bình, Hồ Chí Minh", "ACV", 1),
        ("VNHAN", "Nội Bài", "VN", &["air"], "Sóc Sơn, Hà Nội", "ACV", 2),
        ("VNSTG", "ICD Sóng Thần", "VN", &["icd"], "Dĩ An, Bình Dương", "Sotrans", 1),
        ("SGSIN", "Singapore", "SG", &["sea", "air"], "Pasir Panjang", "PSA", 1),
        ("THLCH", "Laem Chabang", "TH", &["sea"], "Chonburi", "Port Authority of Thailand", 1),
        ("CNSHA", "Shanghai", "CN", &["sea"], "Yangshan", "SIPG", 1),
        ("CNSZX", "Shenzhen", "CN", &["sea"], "Yantian", "YICT", 3),
        ("JPTYO", "Tokyo", "JP", &["sea"], "Ōi, Tokyo", "Tokyo Port Terminal", 1),
        ("KRPUS", "Busan", "KR", &["sea"], "Busan New Port", "BPA", 1),
        ("HKHKG", "Hong Kong", "HK", &["sea", "air"], "Kwai Tsing", "HIT", 2),
        ("MYPKG", "Port Klang", "MY", &["sea"], "Selangor", "Westports", 1),
        ("USLAX", "Los Angeles", "US", &["sea"], "San Pedro", "Port of Los Angeles", 1),
        ("DEHAM", "Hamburg", "DE", &["sea", "river"], "Waltershof", "HHLA", 1),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, (code, name, country, types, address, company, status))| {
            let country_name = label(COUNTRIES, country);
            let type_names: Vec<&str> = types.iter().map(|t| label(TYPE_PORTS, t)).collect();
            json!({
                "portID": format!("port-{:03}", i + 1),
                "portCode": code,
                "portName": name,
                "countryID": country,
                "countryName": country_name,
                "typePorts": types,
                "typePortNames": type_names.join(", "),
                "address": address,
                "company": company,
                "status": status,
                "insertedBy": SEED_AUTHOR,
                "insertedDate": "14/06/2023",
            })
        })
        .collect()
}

pub fn users() -> Vec<Value> {
    let names = [
        "Nguyễn Văn An",
        "Trần Thị Bình",
        "Lê Hoàng Cường",
        "Phạm Minh Dũng",
        "Hoàng Thu Hà",
        "Vũ Đức Hiếu",
        "Đặng Thị Lan",
        "Bùi Quang Minh",
        "Đỗ Thị Ngọc",
        "Hồ Văn Phúc",
        "Ngô Thanh Quang",
        "Dương Thị Thảo",
    ];
    let branches = ["Hồ Chí Minh", "Hà Nội", "Đà Nẵng"];
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            json!({
                "userID": format!("user-{:03}", i + 1),
                "employeeCode": format!("NV{:04}", i + 1),
                "firstName": name,
                "citizenIdentification": format!("0792000{:05}", 1000 + i * 37),
                "visa": "",
                "nationality": "Việt Nam",
                "workingBranch": branches[i % branches.len()],
                "phoneNumber": format!("09{:08}", 64582355 + i),
                "lastLogin": "14/06/2023 08:30",
                "status": (i % 3) + 1,
                "createdDate": "01/01/2023",
                "updatedDate": "14/06/2023",
                "listRole": if i == 0 { "Admin" } else { "Sale" },
            })
        })
        .collect()
}

fn label<'a>(pairs: &[(&str, &'a str)], value: &str) -> &'a str {
    pairs
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, l)| *l)
        .unwrap_or_default()
}
