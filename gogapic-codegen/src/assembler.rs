//! Packages a generated service into output files.

use tracing::debug;

use crate::generator::ServiceOutput;
use crate::imports::{ImportGrouping, ImportSpec};

/// Default package declared in generated headers.
pub const DEFAULT_PACKAGE_NAME: &str = "foo";
/// Default holder named in the license banner.
pub const DEFAULT_COPYRIGHT_HOLDER: &str = "Google LLC";

/// Settings that shape the header of each generated file.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Go package declared in every header.
    pub package_name: String,
    pub copyright_holder: String,
    /// Year stamped into the license banner.
    pub year: i32,
    pub grouping: ImportGrouping,
}

impl GeneratorOptions {
    pub fn new(year: i32) -> Self {
        Self {
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
            copyright_holder: DEFAULT_COPYRIGHT_HOLDER.to_string(),
            year,
            grouping: ImportGrouping::default(),
        }
    }
}

/// One unit of output.
///
/// A service produces a header and a body that share `name`. The body is a
/// continuation: protoc appends it to the file started by the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: String,
    pub content: String,
    pub continuation: bool,
}

fn license(year: i32, holder: &str) -> String {
    format!(
        r#"// Copyright {year} {holder}
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// AUTO-GENERATED CODE. DO NOT EDIT.

"#
    )
}

/// Build the header: license, package clause, and grouped import block.
pub fn header(output: &ServiceOutput, opts: &GeneratorOptions) -> String {
    let mut header = license(opts.year, &opts.copyright_holder);
    header.push_str(&format!("package {}\n\n", opts.package_name));

    let (standard, project) = opts.grouping.partition(&output.imports);

    header.push_str("import (\n");
    write_group(&mut header, &standard);
    if !standard.is_empty() && !project.is_empty() {
        header.push('\n');
    }
    write_group(&mut header, &project);
    header.push_str(")\n\n");

    header
}

fn write_group(header: &mut String, group: &[&ImportSpec]) {
    for imp in group {
        header.push_str(&format!("\t{}\n", imp.render()));
    }
}

/// Turn one service's output into its (header, body) file pair.
pub fn commit(output: ServiceOutput, file_name: &str, opts: &GeneratorOptions) -> [GeneratedFile; 2] {
    let header = header(&output, opts);

    debug!(
        file = %file_name,
        service = %output.service_name,
        imports = output.imports.len(),
        "Committing generated client"
    );

    [
        GeneratedFile {
            name: file_name.to_string(),
            content: header,
            continuation: false,
        },
        GeneratedFile {
            name: file_name.to_string(),
            content: output.body,
            continuation: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imports::ImportSet;

    fn output(imports: &[ImportSpec]) -> ServiceOutput {
        ServiceOutput {
            service_name: "FooService".to_string(),
            body: "// body\n".to_string(),
            imports: imports.iter().cloned().collect::<ImportSet>(),
            long_running: Vec::new(),
        }
    }

    #[test]
    fn test_header_layout() {
        let out = output(&[
            ImportSpec::new("example.com/foo", "foopb"),
            ImportSpec::bare("context"),
            ImportSpec::new("github.com/googleapis/gax-go/v2", "gax"),
        ]);
        let h = header(&out, &GeneratorOptions::new(2018));

        assert!(h.starts_with("// Copyright 2018 Google LLC\n"));
        assert!(h.contains("// AUTO-GENERATED CODE. DO NOT EDIT.\n\npackage foo\n\n"));
        assert!(h.ends_with(
            "import (\n\t\"context\"\n\n\tfoopb \"example.com/foo\"\n\tgax \"github.com/googleapis/gax-go/v2\"\n)\n\n"
        ));
    }

    #[test]
    fn test_no_blank_line_for_single_group() {
        let out = output(&[ImportSpec::bare("context"), ImportSpec::bare("time")]);
        let h = header(&out, &GeneratorOptions::new(2024));
        assert!(h.ends_with("import (\n\t\"context\"\n\t\"time\"\n)\n\n"));

        let out = output(&[ImportSpec::bare("google.golang.org/grpc")]);
        let h = header(&out, &GeneratorOptions::new(2024));
        assert!(h.ends_with("import (\n\t\"google.golang.org/grpc\"\n)\n\n"));
    }

    #[test]
    fn test_custom_options() {
        let mut opts = GeneratorOptions::new(2030);
        opts.package_name = "library".to_string();
        opts.copyright_holder = "Example Corp".to_string();

        let h = header(&output(&[]), &opts);
        assert!(h.starts_with("// Copyright 2030 Example Corp\n"));
        assert!(h.contains("package library\n"));
        assert!(h.ends_with("import (\n)\n\n"));
    }

    #[test]
    fn test_commit_pair() {
        let [head, body] = commit(output(&[]), "out/foo_client.go", &GeneratorOptions::new(2024));

        assert_eq!(head.name, "out/foo_client.go");
        assert!(!head.continuation);
        assert_eq!(body.name, "out/foo_client.go");
        assert!(body.continuation);
        assert_eq!(body.content, "// body\n");
    }
}
