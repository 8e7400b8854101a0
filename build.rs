fn main() {
    // The ESP-IDF sysenv output is only meaningful for firmware builds.
    // Host-target builds (tests, simulation) enable no features and must
    // skip it, otherwise it fails looking for an ESP-IDF environment.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
