error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Json(::serde_json::Error);
        Cache(::sled::Error);
    }

    errors {
        MissingInput(path: String) {
            description("input file does not exist")
            display("input file {:?} does not exist", path)
        }
    }
}
