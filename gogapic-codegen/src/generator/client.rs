//! Client struct, constructor, and connection plumbing.

use super::ServiceGen;
use crate::naming::lower_first;
use crate::printer::p;
use crate::printer::spaces;

impl<'i, 'a> ServiceGen<'i, 'a> {
    pub(super) fn client_init(&mut self, has_lro: bool) {
        self.call_options();
        self.client_struct(has_lro);
        self.client_constructor(has_lro);
        self.client_utils();
    }

    /// `NCallOptions` with one aligned field per method, and its defaults.
    fn call_options(&mut self) {
        let serv_name = self.serv_name;
        let service = self.service;
        let width = service.method.iter().map(|m| m.name().len()).max().unwrap_or(0);

        p!(self.printer, "// {}CallOptions contains the retry settings for each method of {}Client.", serv_name, serv_name);
        p!(self.printer, "type {}CallOptions struct {{", serv_name);
        for m in &service.method {
            p!(self.printer, "{}{} []gax.CallOption", m.name(), spaces(width - m.name().len()));
        }
        self.printer.line("}");
        self.printer.line("");

        p!(self.printer, "func default{}ClientOptions() []option.ClientOption {{", serv_name);
        self.printer.line("return []option.ClientOption{}");
        self.printer.line("}");
        self.printer.line("");

        p!(self.printer, "func default{}CallOptions() *{}CallOptions {{", serv_name, serv_name);
        p!(self.printer, "return &{}CallOptions{{", serv_name);
        for m in &service.method {
            p!(self.printer, "{}:{} []gax.CallOption{{}},", m.name(), spaces(width - m.name().len()));
        }
        self.printer.line("}");
        self.printer.line("}");
        self.printer.line("");
    }

    fn client_struct(&mut self, has_lro: bool) {
        let serv_name = self.serv_name;
        let transport = format!("{}Client", lower_first(serv_name));

        p!(self.printer, "// {}Client is a client for interacting with {}.", serv_name, self.service.name());
        self.printer.line("//");
        self.printer.line("// Methods, except Close, may be called concurrently. However, fields must not be modified concurrently with method calls.");
        p!(self.printer, "type {}Client struct {{", serv_name);
        self.printer.line("// The connection to the service.");
        self.printer.line("conn *grpc.ClientConn");
        self.printer.line("");
        self.printer.line("// The gRPC API client.");
        p!(self.printer, "{} {}.{}Client", transport, self.service_pkg.alias, self.service.name());
        self.printer.line("");
        if has_lro {
            self.printer.line("// LROClient is used internally to handle longrunning operations.");
            self.printer.line("// It is exposed so that its CallOptions can be modified if required.");
            self.printer.line("// Users should not Close this client.");
            self.printer.line("LROClient *lroauto.OperationsClient");
            self.printer.line("");
        }
        self.printer.line("// The call options for this service.");
        p!(self.printer, "CallOptions *{}CallOptions", serv_name);
        self.printer.line("");
        self.printer.line("// The x-goog-* metadata to be sent with each request.");
        self.printer.line("xGoogMetadata metadata.MD");
        self.printer.line("}");
        self.printer.line("");
    }

    fn client_constructor(&mut self, has_lro: bool) {
        let serv_name = self.serv_name;
        let transport = format!("{}Client", lower_first(serv_name));
        let service_comment = self
            .index
            .comment(self.service_id())
            .map(str::trim)
            .unwrap_or("");

        p!(self.printer, "// New{}Client creates a new {} client.", serv_name, self.service.name());
        if !service_comment.is_empty() {
            self.printer.line("//");
            self.printer.comment(service_comment);
        }
        p!(
            self.printer,
            "func New{}Client(ctx context.Context, opts ...option.ClientOption) (*{}Client, error) {{",
            serv_name,
            serv_name
        );
        p!(self.printer, "conn, err := transport.DialGRPC(ctx, append(default{}ClientOptions(), opts...)...)", serv_name);
        self.printer.line("if err != nil {");
        self.printer.line("return nil, err");
        self.printer.line("}");
        p!(self.printer, "c := &{}Client{{", serv_name);
        self.printer.line("conn:        conn,");
        p!(self.printer, "CallOptions: default{}CallOptions(),", serv_name);
        self.printer.line("");
        p!(self.printer, "{}: {}.New{}Client(conn),", transport, self.service_pkg.alias, self.service.name());
        self.printer.line("}");
        self.printer.line("c.setGoogleClientInfo()");
        if has_lro {
            self.printer.line("");
            self.printer.line("c.LROClient, err = lroauto.NewOperationsClient(ctx, option.WithGRPCConn(conn))");
            self.printer.line("if err != nil {");
            self.printer.line("// conn is not closed here: it may be a caller-supplied connection still in use.");
            self.printer.line("return nil, err");
            self.printer.line("}");
        }
        self.printer.line("return c, nil");
        self.printer.line("}");
        self.printer.line("");
    }

    fn client_utils(&mut self) {
        let serv_name = self.serv_name;

        self.printer.line("// Connection returns the client's connection to the API service.");
        p!(self.printer, "func (c *{}Client) Connection() *grpc.ClientConn {{", serv_name);
        self.printer.line("return c.conn");
        self.printer.line("}");
        self.printer.line("");

        self.printer.line("// Close closes the connection to the API service. The user should invoke this when");
        self.printer.line("// the client is no longer required.");
        p!(self.printer, "func (c *{}Client) Close() error {{", serv_name);
        self.printer.line("return c.conn.Close()");
        self.printer.line("}");
        self.printer.line("");

        self.printer.line("// setGoogleClientInfo sets the name and version of the application in");
        self.printer.line("// the `x-goog-api-client` header passed on each request. Intended for");
        self.printer.line("// use by Google-written clients.");
        p!(self.printer, "func (c *{}Client) setGoogleClientInfo(keyval ...string) {{", serv_name);
        self.printer.line("kv := append([]string{\"gl-go\", versionGo()}, keyval...)");
        self.printer.line("kv = append(kv, \"gapic\", versionClient, \"gax\", gax.Version, \"grpc\", grpc.Version)");
        self.printer.line("c.xGoogMetadata = metadata.Pairs(\"x-goog-api-client\", gax.XGoogHeader(kv...))");
        self.printer.line("}");
        self.printer.line("");
    }
}
