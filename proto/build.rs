use std::fs;
use std::path::Path;

fn main() {
    let protos = [
        ("p4runtime/proto", "p4/v1/p4runtime.proto"),
        ("p4runtime/proto", "p4/config/v1/p4info.proto"),
        ("googleapis", "google/rpc/status.proto"),
    ];
    for proto in &protos {
        println!("cargo:rerun-if-changed={}/{}", proto.0, proto.1);
    }

    let includes: Vec<&Path> = ["p4runtime/proto", "googleapis"]
        .iter()
        .map(Path::new)
        .collect();
    let inputs: Vec<String> = protos
        .iter()
        .map(|x| format!("{}/{}", x.0, x.1))
        .collect();

    protobuf_codegen_pure::Codegen::new()
        .out_dir("src")
        .includes(&includes)
        .inputs(&inputs)
        .run()
        .expect("Failed to compile protobuf definitions!");

    // grpcio-compiler works from the same parsed descriptors, so no protoc
    // binary is needed for the service stubs either.
    let input_paths: Vec<&Path> = inputs.iter().map(Path::new).collect();
    let parsed = protobuf_codegen_pure::parse_and_typecheck(&includes, &input_paths)
        .expect("Failed to parse protobuf definitions!");
    for stub in grpcio_compiler::codegen::gen(&parsed.file_descriptors, &parsed.relative_paths) {
        fs::write(Path::new("src").join(&stub.name), &stub.content)
            .expect("Failed to write gRPC definitions!");
    }
}
