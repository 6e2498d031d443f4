use crate::{
    access::{Action, RequestContext},
    config::ScaffoldConfig,
};
use std::fmt::Debug;

///
/// Permission
///
/// A request-level and object-level access check.
/// Both checks allow by default; implementors override what they guard.
///

pub trait Permission: Debug + Send + Sync {
    fn has_permission(&self, _ctx: &RequestContext) -> bool {
        true
    }

    fn has_object_permission(&self, _ctx: &RequestContext, _obj: &dyn Owned) -> bool {
        true
    }
}

///
/// Owned
///
/// Records that carry an owning caller id.
///

pub trait Owned {
    fn owner_id(&self) -> Option<u64>;
}

///
/// AllowAny
///

#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAny;

impl Permission for AllowAny {}

///
/// IsAuthenticated
///

#[derive(Clone, Copy, Debug, Default)]
pub struct IsAuthenticated;

impl Permission for IsAuthenticated {
    fn has_permission(&self, ctx: &RequestContext) -> bool {
        ctx.caller.is_authenticated
    }
}

///
/// IsAdminUser
///

#[derive(Clone, Copy, Debug, Default)]
pub struct IsAdminUser;

impl Permission for IsAdminUser {
    fn has_permission(&self, ctx: &RequestContext) -> bool {
        ctx.caller.is_staff
    }
}

///
/// IsAdminOrReadOnly
///
/// Safe methods for everyone, writes for staff and superusers.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct IsAdminOrReadOnly;

impl Permission for IsAdminOrReadOnly {
    fn has_permission(&self, ctx: &RequestContext) -> bool {
        ctx.method.is_safe() || ctx.caller.is_admin()
    }
}

///
/// IsAdminOrIsSelf
///
/// Object access for the owner, staff, and superusers.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct IsAdminOrIsSelf;

impl Permission for IsAdminOrIsSelf {
    fn has_object_permission(&self, ctx: &RequestContext, obj: &dyn Owned) -> bool {
        let is_owner = matches!(
            (obj.owner_id(), ctx.caller.id),
            (Some(owner), Some(caller)) if owner == caller
        );

        is_owner || ctx.caller.is_admin()
    }
}

///
/// HasPermissions
///
/// Authenticated callers holding every listed codename; superusers always pass.
/// Bare codenames are qualified with the app label.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HasPermissions {
    perms: Vec<String>,
}

impl HasPermissions {
    pub const DEFAULT_APP_LABEL: &'static str = "core";

    #[must_use]
    pub fn new<I, S>(perms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_app_label(Self::DEFAULT_APP_LABEL, perms)
    }

    /// Qualify bare codenames with the configured `default_permission_app`.
    #[must_use]
    pub fn from_config<I, S>(config: &ScaffoldConfig, perms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_app_label(&config.default_permission_app, perms)
    }

    #[must_use]
    pub fn with_app_label<I, S>(app_label: &str, perms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let perms = perms
            .into_iter()
            .map(|perm| {
                let perm = perm.as_ref();
                if perm.contains('.') {
                    perm.to_string()
                } else {
                    format!("{app_label}.{perm}")
                }
            })
            .collect();

        Self { perms }
    }

    #[must_use]
    pub fn perms(&self) -> &[String] {
        &self.perms
    }
}

impl Permission for HasPermissions {
    fn has_permission(&self, ctx: &RequestContext) -> bool {
        let caller = &ctx.caller;
        if !caller.is_authenticated {
            return false;
        }

        caller.is_superuser || self.perms.iter().all(|perm| caller.has_perm(perm))
    }
}

///
/// ActionRule
///

#[derive(Debug)]
pub struct ActionRule {
    actions: Vec<Action>,
    permission: Box<dyn Permission>,
}

impl ActionRule {
    #[must_use]
    pub fn new(
        permission: impl Permission + 'static,
        actions: impl IntoIterator<Item = Action>,
    ) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            permission: Box::new(permission),
        }
    }

    fn covers(&self, action: &Action) -> bool {
        self.actions.contains(action)
    }
}

///
/// ActionBasedPermission
///
/// Routes each check to the first rule that lists the request action.
/// Actions no rule lists are denied.
///

#[derive(Debug, Default)]
pub struct ActionBasedPermission {
    rules: Vec<ActionRule>,
}

impl ActionBasedPermission {
    #[must_use]
    pub const fn new(rules: Vec<ActionRule>) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rule(
        mut self,
        permission: impl Permission + 'static,
        actions: impl IntoIterator<Item = Action>,
    ) -> Self {
        self.rules.push(ActionRule::new(permission, actions));
        self
    }

    fn rule_for(&self, action: &Action) -> Option<&ActionRule> {
        self.rules.iter().find(|rule| rule.covers(action))
    }
}

impl Permission for ActionBasedPermission {
    fn has_permission(&self, ctx: &RequestContext) -> bool {
        self.rule_for(&ctx.action)
            .is_some_and(|rule| rule.permission.has_permission(ctx))
    }

    fn has_object_permission(&self, ctx: &RequestContext, obj: &dyn Owned) -> bool {
        self.rule_for(&ctx.action)
            .is_some_and(|rule| rule.permission.has_object_permission(ctx, obj))
    }
}
