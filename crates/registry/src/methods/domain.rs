//! `domain.*` methods of the DomRobot API.

use inwx_types::{MethodSpec, ParamSpec};

pub fn methods() -> Vec<MethodSpec> {
    vec![
        MethodSpec::new(
            "domain.check",
            "Check domain availability",
            vec![
                ParamSpec::string("domain", "Domain names to check").many(),
                ParamSpec::string("sld", "Second level domain name"),
                ParamSpec::string("tld", "Top level domains").many(),
                ParamSpec::string("region", "Check region TLD groups").many(),
                ParamSpec::integer("wide", "More detailed output"),
            ],
        ),
        MethodSpec::new(
            "domain.create",
            "Register a domain",
            vec![
                ParamSpec::string("domain", "Domain name").required(),
                ParamSpec::string("period", "Renewal period"),
                ParamSpec::integer("registrant", "Registrant contact handle id").required(),
                ParamSpec::integer("admin", "Admin contact handle id"),
                ParamSpec::integer("tech", "Tech contact handle id"),
                ParamSpec::integer("billing", "Billing contact handle id"),
                ParamSpec::string("ns", "List of nameservers").many(),
                ParamSpec::flag("transferLock", "Lock domain"),
                ParamSpec::string("renewalMode", "Domain renewal mode"),
                ParamSpec::string("whoisProvider", "Whois provider"),
                ParamSpec::string("whoisUrl", "Whois URL"),
                ParamSpec::string("scDate", "Scheduled execution date"),
                ParamSpec::string("extData", "Extra domain data"),
                ParamSpec::flag("asynchron", "Asynchronous execution"),
                ParamSpec::string("voucher", "Voucher code"),
                ParamSpec::flag("testing", "Testing mode"),
            ],
        ),
        MethodSpec::new(
            "domain.delete",
            "Delete a domain",
            vec![
                ParamSpec::string("domain", "Domain name").required(),
                ParamSpec::string("scDate", "Scheduled execution date"),
                ParamSpec::flag("testing", "Testing mode"),
            ],
        ),
        MethodSpec::new(
            "domain.getalldomainprices",
            "Fetch prices for all domains",
            vec![
                ParamSpec::string("domain", "Domain name(s)").many(),
                ParamSpec::string("period", "Period to fetch prices for"),
                ParamSpec::string("voucher", "Voucher code"),
            ],
        ),
        MethodSpec::new(
            "domain.getdomainprice",
            "Fetch the price of a specific domain",
            vec![
                ParamSpec::string("domain", "Domain name(s)").many(),
                ParamSpec::string("pricetype", "Price type (reg|renewal|transfer|update|trade)").required(),
                ParamSpec::string("period", "Period for price"),
                ParamSpec::string("voucher", "Voucher code"),
            ],
        ),
        MethodSpec::new(
            "domain.getextradatarules",
            "Fetch rules for domain extra data",
            vec![ParamSpec::string("tld", "TLD to fetch extra data rules for").many()],
        ),
        MethodSpec::new(
            "domain.getPrices",
            "Fetch domain prices",
            vec![
                ParamSpec::string("tld", "Top level domains").many(),
                ParamSpec::flag("vat", "Include VAT"),
                ParamSpec::string("vatCC", "Country code for VAT"),
                ParamSpec::string("voucher", "Voucher code"),
                ParamSpec::integer("page", "Page number"),
                ParamSpec::integer("pagelimit", "Max results"),
            ],
        ),
        MethodSpec::new(
            "domain.getPromos",
            "Fetch current promotions",
            vec![
                ParamSpec::string("tlds", "Specific TLDs to check promos").many(),
                ParamSpec::string("promoType", "Promo type (e.g. REG|RENEWAL)"),
                ParamSpec::integer("period", "Promotion period"),
                ParamSpec::string("periodUnit", "Period unit (Y/M etc.)"),
                ParamSpec::string("executionDate", "Promo execution date"),
                ParamSpec::string("voucher", "Voucher code"),
            ],
        ),
        MethodSpec::new(
            "domain.getRules",
            "Fetch TLD rules",
            vec![ParamSpec::string("tld", "TLD name(s)").many()],
        ),
        MethodSpec::new(
            "domain.getTldGroups",
            "Fetch TLD groups",
            vec![ParamSpec::string("tld", "TLD name(s)").many()],
        ),
        MethodSpec::new(
            "domain.info",
            "Show domain details",
            vec![
                ParamSpec::string("domain", "Domain name"),
                ParamSpec::string("roId", "Repository Object ID"),
                ParamSpec::integer("wide", "More detailed output"),
            ],
        ),
        MethodSpec::new(
            "domain.list",
            "List domains",
            vec![
                ParamSpec::string("domain", "Filter by domain name"),
                ParamSpec::string("roId", "Domain id"),
                ParamSpec::string("status", "Filter by status"),
                ParamSpec::integer("registrant", "Registrant id"),
                ParamSpec::integer("admin", "Admin id"),
                ParamSpec::integer("tech", "Tech id"),
                ParamSpec::integer("billing", "Billing id"),
                ParamSpec::string("renewalMode", "Filter by renewal mode"),
                ParamSpec::flag("transferLock", "Filter by transfer lock status"),
                ParamSpec::flag("noDelegation", "Filter by delegation status"),
                ParamSpec::integer("tag", "Filter by tag ids"),
                ParamSpec::integer("wide", "More detailed output"),
                ParamSpec::string("order", "Sort order"),
                ParamSpec::integer("page", "Page number"),
                ParamSpec::integer("pagelimit", "Max results"),
                ParamSpec::integer("withPrivacy", "Filter by privacy flag"),
            ],
        ),
        MethodSpec::new(
            "domain.log",
            "Fetch domain log entries",
            vec![
                ParamSpec::string("domain", "Filter result by domain name"),
                ParamSpec::string("status", "Filter by status"),
                ParamSpec::string("invoice", "Filter by invoice id"),
                ParamSpec::string("dateFrom", "Filter by start date"),
                ParamSpec::string("dateTo", "Filter by end date"),
                ParamSpec::float("priceMin", "Minimum price"),
                ParamSpec::float("priceMax", "Maximum price"),
                ParamSpec::string("order", "Ordering of results"),
                ParamSpec::integer("page", "Page number"),
                ParamSpec::integer("pagelimit", "Max results"),
            ],
        ),
        MethodSpec::new("domain.priceChanges", "Fetch upcoming price changes", vec![]),
        MethodSpec::new(
            "domain.push",
            "Push a domain to another registrar",
            vec![
                ParamSpec::string("domain", "Domain name").required(),
                ParamSpec::string("target", "Target registrar"),
                ParamSpec::string("scDate", "Scheduled date"),
                ParamSpec::flag("testing", "Testing mode"),
            ],
        ),
        MethodSpec::new(
            "domain.removeClientHold",
            "Lift a clientHold",
            vec![
                ParamSpec::string("domain", "Domain name").required(),
                ParamSpec::flag("testing", "Testing mode"),
            ],
        ),
        MethodSpec::new(
            "domain.renew",
            "Renew a domain",
            vec![
                ParamSpec::string("domain", "Domain name").required(),
                ParamSpec::string("period", "Renewal period").required(),
                ParamSpec::string("expiration", "Current expiration date").required(),
                ParamSpec::flag("asynchron", "Async execution"),
                ParamSpec::flag("testing", "Testing mode"),
            ],
        ),
        MethodSpec::new(
            "domain.restore",
            "Restore a deleted domain",
            vec![
                ParamSpec::string("domain", "Domain name").required(),
                ParamSpec::string("renewalMode", "Domain renewal mode"),
                ParamSpec::flag("testing", "Testing mode"),
            ],
        ),
        MethodSpec::new(
            "domain.setClientHold",
            "Set a clientHold",
            vec![
                ParamSpec::string("domain", "Domain name").required(),
                ParamSpec::flag("testing", "Testing mode"),
            ],
        ),
        MethodSpec::new("domain.stats", "Fetch domain statistics", vec![]),
        MethodSpec::new(
            "domain.trade",
            "Change the owner of a domain",
            vec![
                ParamSpec::string("domain", "Domain name").required(),
                ParamSpec::integer("registrant", "New owner contact handle id").required(),
                ParamSpec::integer("admin", "New admin id"),
                ParamSpec::integer("tech", "New tech id"),
                ParamSpec::integer("billing", "New billing id"),
                ParamSpec::string("ns", "Nameservers").many(),
                ParamSpec::string("authCode", "Authorization code"),
                ParamSpec::string("whoisProvider", "Whois provider"),
                ParamSpec::string("whoisUrl", "Whois url"),
                ParamSpec::string("scDate", "Scheduled date"),
                ParamSpec::string("extData", "Extra domain data"),
                ParamSpec::flag("asynchron", "Async mode"),
                ParamSpec::flag("testing", "Testing mode"),
            ],
        ),
        MethodSpec::new(
            "domain.transfer",
            "Transfer a domain to INWX",
            vec![
                ParamSpec::string("domain", "Domain name").required(),
                ParamSpec::integer("registrant", "Owner contact"),
                ParamSpec::integer("admin", "Admin contact"),
                ParamSpec::integer("tech", "Tech contact"),
                ParamSpec::integer("billing", "Billing contact"),
                ParamSpec::string("ns", "Nameservers").many(),
                ParamSpec::flag("nsTakeover", "Keep existing nameservers"),
                ParamSpec::flag("contactTakeover", "Transfer contact data"),
                ParamSpec::flag("transferLock", "Domain lock"),
                ParamSpec::string("authCode", "Authorization code"),
                ParamSpec::string("renewalMode", "Renewal mode"),
                ParamSpec::string("whoisProvider", "Whois provider"),
                ParamSpec::string("whoisUrl", "Whois url"),
                ParamSpec::string("extData", "Extra domain data"),
                ParamSpec::string("scDate", "Scheduled date"),
                ParamSpec::flag("asynchron", "Async mode"),
                ParamSpec::string("voucher", "Voucher code"),
                ParamSpec::flag("testing", "Testing mode"),
            ],
        ),
        MethodSpec::new(
            "domain.transfercancel",
            "Cancel a pending domain transfer",
            vec![ParamSpec::string("domain", "Domain name").required()],
        ),
        MethodSpec::new(
            "domain.transferOut",
            "Acknowledge or deny an outgoing transfer",
            vec![
                ParamSpec::string("domain", "Domain name").required(),
                ParamSpec::string("answer", "Acknowledge or deny transfer").required(),
                ParamSpec::flag("testing", "Testing mode"),
            ],
        ),
        MethodSpec::new(
            "domain.update",
            "Update a domain",
            vec![
                ParamSpec::string("domain", "Domain name").required(),
                ParamSpec::integer("registrant", "Owner contact handle id"),
                ParamSpec::integer("admin", "Admin handle id"),
                ParamSpec::integer("tech", "Tech handle id"),
                ParamSpec::integer("billing", "Billing handle id"),
                ParamSpec::string("ns", "Nameservers").many(),
                ParamSpec::flag("transferLock", "Domain lock"),
                ParamSpec::string("period", "Registration/renewal period"),
                ParamSpec::string("authCode", "Authorization code"),
                ParamSpec::string("scDate", "Scheduled date"),
                ParamSpec::string("renewalMode", "Renewal mode"),
                ParamSpec::string("transferMode", "Transfer mode"),
                ParamSpec::string("whoisProvider", "Whois provider"),
                ParamSpec::string("whoisUrl", "Whois url"),
                ParamSpec::string("extData", "Extra domain data"),
                ParamSpec::flag("asynchron", "Async mode"),
                ParamSpec::flag("testing", "Testing mode"),
            ],
        ),
        MethodSpec::new(
            "domain.whois",
            "Fetch whois information of a domain",
            vec![ParamSpec::string("domain", "Domain name").required()],
        ),
    ]
}
