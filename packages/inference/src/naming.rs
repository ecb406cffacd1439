use dtogen_schema::normalize_class_name;

/// Suffix stripped from class names before `Interface` is appended
const DTO_SUFFIX: &str = "DTO";
const INTERFACE_SUFFIX: &str = "Interface";

/// Unqualified class name (`App\DTO\UserDTO` → `UserDTO`)
pub fn short_name(class: &str) -> &str {
    let class = normalize_class_name(class);
    class.rsplit('\\').next().unwrap_or(class)
}

/// Interface name for a class: short name, one trailing `DTO` removed,
/// `Interface` appended
pub fn interface_name(class: &str) -> String {
    let short = short_name(class);
    let base = short.strip_suffix(DTO_SUFFIX).unwrap_or(short);
    format!("{}{}", base, INTERFACE_SUFFIX)
}
