//! `nameserver.*` methods of the DomRobot API.

use inwx_types::{MethodSpec, ParamSpec};

/// Parameters shared by every method that configures a URL redirect record.
fn url_redirect_params() -> [ParamSpec; 5] {
    [
        ParamSpec::string("urlRedirectType", "URL redirect type"),
        ParamSpec::string("urlRedirectTitle", "URL redirect title"),
        ParamSpec::string("urlRedirectDescription", "URL redirect description"),
        ParamSpec::string("urlRedirectFavIcon", "URL redirect favicon"),
        ParamSpec::string("urlRedirectKeywords", "URL redirect keywords"),
    ]
}

pub fn methods() -> Vec<MethodSpec> {
    let mut create = vec![
        ParamSpec::string("domain", "Domain name").required(),
        ParamSpec::string("type", "Type of nameserver entry").required(),
        ParamSpec::string("ns", "Nameserver list").many(),
        ParamSpec::string("masterIp", "Master IP address"),
        ParamSpec::string("web", "Web NS entry"),
        ParamSpec::string("mail", "Mail NS entry"),
        ParamSpec::string("soaEmail", "SOA email"),
    ];
    create.extend(url_redirect_params());
    create.extend([
        ParamSpec::flag("testing", "Testing mode"),
        ParamSpec::flag("ignoreExisting", "Ignore existing"),
    ]);

    let mut create_record = vec![
        ParamSpec::string("domain", "Domain name"),
        ParamSpec::string("roId", "NS domain id"),
        ParamSpec::string("type", "Record type").required(),
        ParamSpec::string("content", "Record content").required(),
        ParamSpec::string("name", "Record name"),
        ParamSpec::integer("ttl", "TTL"),
        ParamSpec::integer("prio", "Priority"),
    ];
    create_record.extend(url_redirect_params());
    create_record.extend([
        ParamSpec::flag("urlAppend", "Append path"),
        ParamSpec::flag("testing", "Testing mode"),
    ]);

    let mut update = vec![
        ParamSpec::string("domain", "Domain name"),
        ParamSpec::string("roId", "NS domain id"),
        ParamSpec::string("type", "Type of NS entry"),
        ParamSpec::string("masterIp", "Master IP address"),
        ParamSpec::string("ns", "Nameservers").many(),
        ParamSpec::string("web", "Web NS entry"),
        ParamSpec::string("mail", "Mail NS entry"),
    ];
    update.extend(url_redirect_params());
    update.push(ParamSpec::flag("testing", "Testing mode"));

    let mut update_record = vec![
        ParamSpec::string("id", "Record id").required(),
        ParamSpec::string("name", "Record name"),
        ParamSpec::string("type", "Record type"),
        ParamSpec::string("content", "Record content"),
        ParamSpec::integer("prio", "Priority"),
        ParamSpec::integer("ttl", "TTL"),
    ];
    update_record.extend(url_redirect_params());
    update_record.extend([
        ParamSpec::flag("urlAppend", "Append path"),
        ParamSpec::flag("testing", "Testing mode"),
    ]);

    vec![
        MethodSpec::new(
            "nameserver.check",
            "Check nameserver responses for a domain",
            vec![
                ParamSpec::string("domain", "Domain name").required(),
                ParamSpec::string("ns", "Nameserver list").many().required(),
            ],
        ),
        MethodSpec::new(
            "nameserver.clone",
            "Copy DNS data from one domain to another",
            vec![
                ParamSpec::string("sourceDomain", "Source domain").required(),
                ParamSpec::string("targetDomain", "Target domain").required(),
            ],
        ),
        MethodSpec::new("nameserver.create", "Create a nameserver domain", create),
        MethodSpec::new("nameserver.createRecord", "Create a DNS record", create_record),
        MethodSpec::new(
            "nameserver.delete",
            "Delete a nameserver domain",
            vec![
                ParamSpec::string("domain", "Domain name"),
                ParamSpec::string("roId", "NS domain id"),
                ParamSpec::flag("testing", "Testing mode"),
            ],
        ),
        MethodSpec::new(
            "nameserver.deleteRecord",
            "Delete a DNS record",
            vec![
                ParamSpec::string("id", "Record id").required(),
                ParamSpec::flag("testing", "Testing mode"),
            ],
        ),
        MethodSpec::new(
            "nameserver.export",
            "Export a nameserver zone",
            vec![ParamSpec::string("domain", "Domain name").required()],
        ),
        MethodSpec::new(
            "nameserver.exportlist",
            "Export the list of nameserver domains",
            vec![
                ParamSpec::string("format", "Export format"),
                ParamSpec::string("domain", "Domain name filter"),
                ParamSpec::integer("wide", "Wide output"),
                ParamSpec::integer("page", "Page number"),
                ParamSpec::integer("pagelimit", "Max results"),
            ],
        ),
        MethodSpec::new(
            "nameserver.exportrecords",
            "Export nameserver records",
            vec![
                ParamSpec::string("format", "Export format"),
                ParamSpec::string("name", "Record name filter"),
                ParamSpec::integer("page", "Page number"),
                ParamSpec::integer("limit", "Limit"),
            ],
        ),
        MethodSpec::new(
            "nameserver.info",
            "Show nameserver domain details",
            vec![
                ParamSpec::string("domain", "Domain name"),
                ParamSpec::string("roId", "NS domain id"),
                ParamSpec::integer("recordId", "Record id"),
                ParamSpec::string("type", "Record type"),
                ParamSpec::string("name", "Record name"),
                ParamSpec::string("content", "Record content"),
                ParamSpec::integer("ttl", "TTL"),
                ParamSpec::integer("prio", "Priority"),
            ],
        ),
        MethodSpec::new(
            "nameserver.list",
            "List nameserver domains",
            vec![
                ParamSpec::string("domain", "Domain name filter"),
                ParamSpec::integer("wide", "Wide output"),
                ParamSpec::integer("page", "Page number"),
                ParamSpec::integer("pagelimit", "Max results"),
            ],
        ),
        MethodSpec::new("nameserver.update", "Update a nameserver domain", update),
        MethodSpec::new("nameserver.updateRecord", "Update a DNS record", update_record),
    ]
}
