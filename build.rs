fn main() {
    // Only compile Windows resources on Windows target
    #[cfg(target_os = "windows")]
    {
        println!("cargo:rerun-if-changed=resources/windows/resources.rc");
        println!("cargo:rerun-if-changed=resources/windows/icon-carousel.manifest");
        // Embed the Windows resource file (application manifest)
        let _ = embed_resource::compile("resources/windows/resources.rc", embed_resource::NONE);
    }
}
